//! Technical parameter name and unit table.
//!
//! Parameter names may contain `<template>` placeholders, for example
//! `NUMBER_<short_sensor_name>Resets_COUNT`. Each placeholder captures one
//! alphanumeric run, and the captured value is checked against the template's
//! value rule when one is registered.

use std::collections::{BTreeMap, BTreeSet};

use argo_model::TemplateMatch;
use regex::Regex;
use tracing::trace;

use crate::error::{Result, StandardsError};
use crate::traits::TechParamSpec;

/// Regex fragment captured by every placeholder.
const PLACEHOLDER_CAPTURE: &str = "([A-Za-z0-9]+)";

// =============================================================================
// Value rules
// =============================================================================

/// Rule a captured template value must satisfy.
#[derive(Debug, Clone)]
pub enum ValueRule {
    /// Value must be one of a fixed list.
    OneOf(BTreeSet<String>),
    /// Value must fully match a regex.
    Pattern(Regex),
}

impl ValueRule {
    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::OneOf(values.into_iter().map(Into::into).collect())
    }

    /// Compile a value regex. The expression is anchored at both ends.
    pub fn pattern(expr: &str) -> Result<Self> {
        Regex::new(&format!("^(?:{expr})$"))
            .map(Self::Pattern)
            .map_err(|source| StandardsError::regex(expr, source))
    }

    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::OneOf(values) => values.contains(value),
            Self::Pattern(regex) => regex.is_match(value),
        }
    }
}

// =============================================================================
// Name patterns
// =============================================================================

/// A parameter name definition containing placeholders, compiled to a regex.
#[derive(Debug, Clone)]
pub struct NamePattern {
    definition: String,
    regex: Regex,
    templates: Vec<String>,
}

impl NamePattern {
    /// Compile a definition such as `CLOCK_<short_sensor_name>Offset`.
    ///
    /// Literal text is escaped; each `<name>` becomes one capture group. A
    /// placeholder name may appear only once per definition.
    pub fn compile(definition: &str) -> Result<Self> {
        let mut expr = String::from("^");
        let mut templates = Vec::new();
        let mut rest = definition;

        while let Some(open) = rest.find('<') {
            expr.push_str(&regex::escape(&rest[..open]));
            let after = &rest[open + 1..];
            let close = after
                .find('>')
                .ok_or_else(|| StandardsError::template(definition, "unterminated placeholder"))?;
            let template = &after[..close];
            if template.is_empty() {
                return Err(StandardsError::template(definition, "empty placeholder"));
            }
            if !template
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
            {
                return Err(StandardsError::template(
                    definition,
                    "placeholder names may only contain letters, digits and underscores",
                ));
            }
            if templates.iter().any(|seen| seen == template) {
                return Err(StandardsError::template(
                    definition,
                    "placeholder names must be unique within a definition",
                ));
            }
            expr.push_str(PLACEHOLDER_CAPTURE);
            templates.push(template.to_string());
            rest = &after[close + 1..];
        }
        if rest.contains('>') {
            return Err(StandardsError::template(definition, "unmatched '>'"));
        }
        expr.push_str(&regex::escape(rest));
        expr.push('$');

        let regex =
            Regex::new(&expr).map_err(|source| StandardsError::regex(definition, source))?;
        Ok(Self {
            definition: definition.to_string(),
            regex,
            templates,
        })
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Template names in the order they appear.
    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    /// Captured `(template, value)` pairs when `name` fully matches.
    pub fn captures<'a>(&'a self, name: &str) -> Option<Vec<(&'a str, String)>> {
        let caps = self.regex.captures(name)?;
        Some(
            self.templates
                .iter()
                .zip(caps.iter().skip(1))
                .filter_map(|(template, value)| {
                    value.map(|value| (template.as_str(), value.as_str().to_string()))
                })
                .collect(),
        )
    }
}

/// Whether a definition contains placeholders.
fn has_placeholder(definition: &str) -> bool {
    definition.contains('<') || definition.contains('>')
}

// =============================================================================
// Table
// =============================================================================

/// Technical parameter table.
///
/// Built with [`TechParamTable::builder`].
#[derive(Debug, Clone, Default)]
pub struct TechParamTable {
    active_names: BTreeSet<String>,
    deprecated_names: BTreeSet<String>,
    active_patterns: Vec<NamePattern>,
    deprecated_patterns: Vec<NamePattern>,
    value_rules: BTreeMap<String, ValueRule>,
    active_units: BTreeSet<String>,
    deprecated_units: BTreeSet<String>,
}

impl TechParamTable {
    pub fn builder() -> TechParamTableBuilder {
        TechParamTableBuilder::default()
    }

    fn match_patterns(
        &self,
        patterns: &[NamePattern],
        name: &str,
        base: TemplateMatch,
    ) -> Option<TemplateMatch> {
        let (pattern, captures) = patterns
            .iter()
            .find_map(|pattern| pattern.captures(name).map(|caps| (pattern, caps)))?;
        trace!(name, pattern = pattern.definition(), "parameter name matched pattern");

        let matched = captures
            .into_iter()
            .fold(base, |matched, (template, value)| match self.value_rules.get(template) {
                Some(rule) if rule.accepts(&value) => matched,
                Some(_) => matched.with_failed(template, value),
                None => matched.with_unmatched(template, value),
            });
        Some(matched)
    }
}

impl TechParamSpec for TechParamTable {
    fn resolve_param(&self, name: &str) -> Option<TemplateMatch> {
        if self.active_names.contains(name) {
            return Some(TemplateMatch::active());
        }
        if self.deprecated_names.contains(name) {
            return Some(TemplateMatch::deprecated());
        }
        self.match_patterns(&self.active_patterns, name, TemplateMatch::active())
            .or_else(|| {
                self.match_patterns(&self.deprecated_patterns, name, TemplateMatch::deprecated())
            })
    }

    fn is_active_unit(&self, unit: &str) -> bool {
        self.active_units.contains(unit)
    }

    fn is_deprecated_unit(&self, unit: &str) -> bool {
        self.deprecated_units.contains(unit)
    }
}

// =============================================================================
// Builder
// =============================================================================

#[derive(Debug, Clone)]
enum RuleSource {
    List(Vec<String>),
    Regex(String),
}

/// Collects table entries; pattern compilation happens in [`Self::build`].
#[derive(Debug, Clone, Default)]
pub struct TechParamTableBuilder {
    active_names: Vec<String>,
    deprecated_names: Vec<String>,
    value_rules: Vec<(String, RuleSource)>,
    active_units: BTreeSet<String>,
    deprecated_units: BTreeSet<String>,
}

impl TechParamTableBuilder {
    /// Add active parameter names. Definitions with placeholders become patterns,
    /// tried in the order they are added.
    #[must_use]
    pub fn active_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.active_names.extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn deprecated_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deprecated_names
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Restrict a template to a fixed list of values.
    #[must_use]
    pub fn value_list<I, S>(mut self, template: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.value_rules.push((
            template.into(),
            RuleSource::List(values.into_iter().map(Into::into).collect()),
        ));
        self
    }

    /// Restrict a template to values fully matching a regex.
    #[must_use]
    pub fn value_pattern(mut self, template: impl Into<String>, expr: impl Into<String>) -> Self {
        self.value_rules
            .push((template.into(), RuleSource::Regex(expr.into())));
        self
    }

    #[must_use]
    pub fn active_units<I, S>(mut self, units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.active_units.extend(units.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn deprecated_units<I, S>(mut self, units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deprecated_units
            .extend(units.into_iter().map(Into::into));
        self
    }

    /// Compile patterns and value rules.
    ///
    /// A later rule for the same template replaces an earlier one.
    pub fn build(self) -> Result<TechParamTable> {
        let (active_patterns, active_names) = split_definitions(self.active_names)?;
        let (deprecated_patterns, deprecated_names) = split_definitions(self.deprecated_names)?;

        let mut value_rules = BTreeMap::new();
        for (template, source) in self.value_rules {
            let rule = match source {
                RuleSource::List(values) => ValueRule::one_of(values),
                RuleSource::Regex(expr) => ValueRule::pattern(&expr)?,
            };
            value_rules.insert(template, rule);
        }

        Ok(TechParamTable {
            active_names,
            deprecated_names,
            active_patterns,
            deprecated_patterns,
            value_rules,
            active_units: self.active_units,
            deprecated_units: self.deprecated_units,
        })
    }
}

fn split_definitions(definitions: Vec<String>) -> Result<(Vec<NamePattern>, BTreeSet<String>)> {
    let mut patterns = Vec::new();
    let mut exact = BTreeSet::new();
    for definition in definitions {
        if has_placeholder(&definition) {
            patterns.push(NamePattern::compile(&definition)?);
        } else {
            exact.insert(definition);
        }
    }
    Ok((patterns, exact))
}
