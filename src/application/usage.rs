//! Usage text: one line per invocable entry of a target

use itertools::Itertools;

use crate::application::resolver::title_case;
use crate::domain::{ParameterKind, Signature, StructuredTarget, Target};

/// Words that turn a dispatch into a usage request.
pub const HELP_WORDS: [&str; 4] = ["help", "--help", "-help", "-h"];

/// A recognised help request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpRequest<'a> {
    /// `prog help`
    General,
    /// `prog <subcommand> help`
    Subcommand(&'a str),
}

impl<'a> HelpRequest<'a> {
    /// Recognise `[prog, help]` and `[prog, sub, help]`; anything else is a dispatch.
    pub fn detect(tokens: &'a [String]) -> Option<Self> {
        let is_help = |token: &String| HELP_WORDS.contains(&token.as_str());
        match tokens {
            [_, word] if is_help(word) => Some(HelpRequest::General),
            [_, sub, word] if is_help(word) => Some(HelpRequest::Subcommand(sub.as_str())),
            _ => None,
        }
    }

    pub fn subcommand(&self) -> Option<&'a str> {
        match *self {
            HelpRequest::General => None,
            HelpRequest::Subcommand(sub) => Some(sub),
        }
    }
}

/// One way of invoking a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageEntry {
    /// Command word as shown, e.g. `[Add]`, `AddInt` or `MyMath.Add`.
    pub command: String,
    /// Selector spellings that reach this entry.
    pub selectors: Vec<String>,
    pub flags: Vec<(String, ParameterKind)>,
    pub signature: Signature,
}

impl UsageEntry {
    fn matches(&self, subcommand: &str) -> bool {
        let titled = title_case(subcommand);
        self.selectors
            .iter()
            .any(|selector| selector == subcommand || *selector == titled)
    }

    fn render(&self, program: &str) -> String {
        let mut parts = vec![program.to_string()];
        parts.extend(
            self.flags
                .iter()
                .map(|(name, kind)| format!("[--{name}=<{kind}>]")),
        );
        parts.push(self.command.clone());
        parts.extend(self.signature.params.iter().map(|kind| format!("<{kind}>")));
        let mut line = parts.join(" ");
        if !self.signature.results.is_empty() {
            line.push_str(" -> ");
            line.push_str(&self.signature.results.iter().join(", "));
        }
        line
    }
}

/// Every invocable entry of `target`, in target order.
pub fn usage_entries(target: &Target) -> Vec<UsageEntry> {
    match target {
        Target::Callable(function) => vec![UsageEntry {
            command: format!("[{}]", function.name()),
            selectors: vec![function.name().to_string()],
            flags: Vec::new(),
            signature: function.signature().clone(),
        }],
        Target::Structured(record) => record_entries(record.as_ref(), false),
        Target::Collection(items) => items
            .iter()
            .flat_map(|item| match item {
                Target::Callable(function) => vec![UsageEntry {
                    command: function.name().to_string(),
                    selectors: vec![function.name().to_string()],
                    flags: Vec::new(),
                    signature: function.signature().clone(),
                }],
                Target::Structured(record) => record_entries(record.as_ref(), true),
                // never selectable from a collection
                Target::Collection(_) | Target::Unsupported(_) => Vec::new(),
            })
            .collect(),
        Target::Unsupported(_) => Vec::new(),
    }
}

fn record_entries(record: &dyn StructuredTarget, qualified: bool) -> Vec<UsageEntry> {
    let type_name = record.type_name();
    let flags: Vec<(String, ParameterKind)> = record
        .fields()
        .into_iter()
        .map(|(name, kind)| (name.to_string(), kind))
        .collect();

    record
        .methods()
        .into_iter()
        .map(|(name, signature)| {
            let full = format!("{type_name}.{name}");
            let (command, selectors) = if qualified {
                (full.clone(), vec![full])
            } else {
                (name.to_string(), vec![name.to_string(), full])
            };
            UsageEntry {
                command,
                selectors,
                flags: flags.clone(),
                signature: signature.clone(),
            }
        })
        .collect()
}

/// Render usage for `target`, narrowed to `subcommand` when it names any entry.
pub fn render_usage(program: &str, target: &Target, subcommand: Option<&str>) -> String {
    let entries = usage_entries(target);
    let selected: Vec<&UsageEntry> = match subcommand {
        Some(sub) if entries.iter().any(|entry| entry.matches(sub)) => {
            entries.iter().filter(|entry| entry.matches(sub)).collect()
        }
        _ => entries.iter().collect(),
    };

    let mut text = String::from("Usage:");
    if selected.is_empty() {
        text.push_str(&format!("\n  {program} (\"{}\" has nothing to invoke)", target.describe()));
    }
    for entry in selected {
        text.push_str("\n  ");
        text.push_str(&entry.render(program));
    }
    text
}
