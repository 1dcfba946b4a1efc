//! Reading CSS text back into a [`Stylesheet`].
//!
//! Built on `cssparser`, which does the tokenizing, block matching and
//! comment handling. This parser accepts exactly what the generator emits:
//! style rules with arbitrary selectors, declarations with arbitrary values,
//! and `@media` blocks (nested to any depth). Any other at-rule, an empty
//! selector, or an empty declaration value is an error.
//!
//! Selectors, media conditions and values are kept as source text with
//! their whitespace normalized; nothing is interpreted.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
};

use crate::css_map::Declarations;
use crate::error::CssError;
use crate::stylesheet::{normalize_condition, normalize_selector, normalize_value, Rule, Stylesheet};

/// Parses a stylesheet.
///
/// ```rust
/// use gruvbox_css::parse_stylesheet;
///
/// let sheet = parse_stylesheet(":root { --gruvbox-abs-dark0: #282828; }").unwrap();
/// assert_eq!(sheet.to_minified(), ":root{--gruvbox-abs-dark0:#282828}");
/// ```
pub fn parse_stylesheet(css: &str) -> Result<Stylesheet, CssError> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut rule_parser = RuleParser;

    let mut sheet = Stylesheet::new();
    for result in cssparser::StyleSheetParser::new(&mut parser, &mut rule_parser) {
        match result {
            Ok(rule) => sheet.push(rule),
            Err((error, slice)) => return Err(to_css_error(error, slice)),
        }
    }
    Ok(sheet)
}

fn to_css_error(error: ParseError<'_, ()>, slice: &str) -> CssError {
    CssError::Parse {
        line: error.location.line + 1,
        column: error.location.column,
        message: format!("{:?} in '{}'", error.kind, slice.trim()),
    }
}

/// Consumes the rest of `input` and returns its source text.
fn remaining_source<'i>(input: &mut Parser<'i, '_>) -> &'i str {
    let start = input.position();
    while input.next().is_ok() {}
    input.slice_from(start)
}

/// Top-level and `@media`-nested rules.
struct RuleParser;

impl<'i> QualifiedRuleParser<'i> for RuleParser {
    type Prelude = String;
    type QualifiedRule = Rule;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let selector = normalize_selector(remaining_source(input), false);
        if selector.is_empty() {
            return Err(input.new_custom_error::<(), ()>(()));
        }
        Ok(selector)
    }

    fn parse_block<'t>(
        &mut self,
        selector: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let mut declaration_parser = DeclarationListParser;
        let body = RuleBodyParser::new(input, &mut declaration_parser);

        let mut declarations = Declarations::new();
        for item in body {
            let (property, value) = item.map_err(|(error, _)| error)?;
            declarations.insert(property, value);
        }

        Ok(Rule::style(&selector, declarations))
    }
}

impl<'i> AtRuleParser<'i> for RuleParser {
    type Prelude = String;
    type AtRule = Rule;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        if !name.eq_ignore_ascii_case("media") {
            return Err(input.new_custom_error::<(), ()>(()));
        }
        let condition = normalize_condition(remaining_source(input), false);
        if condition.is_empty() {
            return Err(input.new_custom_error::<(), ()>(()));
        }
        Ok(condition)
    }

    fn parse_block<'t>(
        &mut self,
        condition: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        let mut rules = Vec::new();
        for result in cssparser::StyleSheetParser::new(input, self) {
            rules.push(result.map_err(|(error, _)| error)?);
        }
        Ok(Rule::media(&condition, rules))
    }
}

/// Declarations inside a style rule.
struct DeclarationListParser;

impl<'i> DeclarationParser<'i> for DeclarationListParser {
    type Declaration = (String, String);
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let value = normalize_value(remaining_source(input));
        if value.is_empty() {
            return Err(input.new_custom_error::<(), ()>(()));
        }
        Ok((name.as_ref().to_string(), value))
    }
}

impl<'i> AtRuleParser<'i> for DeclarationListParser {
    type Prelude = ();
    type AtRule = (String, String);
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for DeclarationListParser {
    type Prelude = ();
    type QualifiedRule = (String, String);
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, (String, String), ()> for DeclarationListParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}
