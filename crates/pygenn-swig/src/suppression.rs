// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Suppression list tracking
//!
//! Mirrors how the binding compiler resolves `%ignore` / `%rename` rules for
//! a symbol: rules apply in call order and the most recent rule matching an
//! identifier decides whether it is wrapped. Renaming to [`IGNORE_PATTERN`]
//! suppresses, renaming to [`RESTORE_PATTERN`] restores, and the [`MATCH_ALL`]
//! subject covers every identifier.

use crate::directive::{Directive, IGNORE_PATTERN, MATCH_ALL, RESTORE_PATTERN};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Subject {
    All,
    Named(String),
}

impl Subject {
    fn from_identifier(identifier: &str) -> Self {
        if identifier == MATCH_ALL {
            Subject::All
        } else {
            Subject::Named(identifier.to_string())
        }
    }

    fn matches(&self, identifier: &str) -> bool {
        match self {
            Subject::All => true,
            Subject::Named(name) => name == identifier,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rule {
    subject: Subject,
    visible: bool,
}

/// Ordered visibility rules recorded from emitted directives
#[derive(Debug, Clone, Default)]
pub struct SuppressionList {
    rules: Vec<Rule>,
}

impl SuppressionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the visibility effect of a directive, if it has one
    pub fn record(&mut self, directive: &Directive) {
        let rule = match directive {
            Directive::Ignore { identifier, .. } => Rule {
                subject: Subject::from_identifier(identifier),
                visible: false,
            },
            Directive::Rename {
                identifier,
                new_name,
                ..
            } if new_name == IGNORE_PATTERN => Rule {
                subject: Subject::from_identifier(identifier),
                visible: false,
            },
            Directive::Rename {
                identifier,
                new_name,
                ..
            } if new_name == RESTORE_PATTERN => Rule {
                subject: Subject::from_identifier(identifier),
                visible: true,
            },
            _ => return,
        };
        self.rules.push(rule);
    }

    /// Whether `identifier` ends up wrapped; identifiers no rule touches are visible
    pub fn is_visible(&self, identifier: &str) -> bool {
        self.rules
            .iter()
            .rev()
            .find(|rule| rule.subject.matches(identifier))
            .map_or(true, |rule| rule.visible)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(directives: &[Directive]) -> SuppressionList {
        let mut list = SuppressionList::new();
        for directive in directives {
            list.record(directive);
        }
        list
    }

    #[test]
    fn test_default_is_visible() {
        let list = SuppressionList::new();
        assert!(list.is_visible("Anything"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_ignore_all_then_unignore_is_allow_list() {
        let list = list_of(&[Directive::ignore_all(), Directive::unignore("Foo")]);
        assert!(list.is_visible("Foo"));
        assert!(!list.is_visible("Bar"));
    }

    #[test]
    fn test_unignore_then_ignore_all_suppresses_everything() {
        let list = list_of(&[Directive::unignore("Foo"), Directive::ignore_all()]);
        assert!(!list.is_visible("Foo"));
        assert!(!list.is_visible("Bar"));
    }

    #[test]
    fn test_targeted_ignore_after_unignore_all() {
        let list = list_of(&[
            Directive::ignore_all(),
            Directive::unignore_all(),
            Directive::ignore("initGeNN"),
        ]);
        assert!(!list.is_visible("initGeNN"));
        assert!(list.is_visible("NNmodel"));
    }

    #[test]
    fn test_plain_rename_does_not_change_visibility() {
        let list = list_of(&[Directive::ignore("Foo"), Directive::rename("Foo", "__call__")]);
        assert!(!list.is_visible("Foo"));
    }
}
