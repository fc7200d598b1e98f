use crate::theme::Theme;
use crossterm::{
    Command,
    style::{Attribute, ResetColor, SetAttribute, SetForegroundColor},
};
use std::collections::HashMap;
use tries_core::{Error, Result};

/// Values a resolver can draw on when producing its replacement text.
pub struct TemplateContext<'a> {
    pub theme: &'a Theme,
    pub query: &'a str,
    pub matches: usize,
    pub total: usize,
}

pub type Resolver = fn(&TemplateContext<'_>) -> String;

/// Lookup table from token name to resolver.
pub struct Templates {
    resolvers: HashMap<&'static str, Resolver>,
}

impl Default for Templates {
    fn default() -> Self {
        let mut resolvers: HashMap<&'static str, Resolver> = HashMap::new();
        resolvers.insert("accent", |ctx| {
            ansi(SetForegroundColor(ctx.theme.accent)) + &ansi(SetAttribute(Attribute::Bold))
        });
        resolvers.insert("muted", |ctx| ansi(SetForegroundColor(ctx.theme.muted)));
        resolvers.insert("selected", |ctx| {
            ansi(SetForegroundColor(ctx.theme.highlight_fg)) + &ansi(SetAttribute(Attribute::Bold))
        });
        resolvers.insert("match", |ctx| {
            ansi(SetForegroundColor(ctx.theme.accent)) + &ansi(SetAttribute(Attribute::Underlined))
        });
        resolvers.insert("reset", |_| {
            ansi(SetAttribute(Attribute::Reset)) + &ansi(ResetColor)
        });
        resolvers.insert("query", |ctx| ctx.query.to_string());
        resolvers.insert("matches", |ctx| ctx.matches.to_string());
        resolvers.insert("total", |ctx| ctx.total.to_string());
        Self { resolvers }
    }
}

impl Templates {
    /// Replace every `{token}` in `template`. Resolver output is inserted as-is and
    /// never scanned again. A `{` with no closing `}` is kept literally.
    pub fn expand(&self, template: &str, ctx: &TemplateContext<'_>) -> Result<String> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                out.push_str(&rest[open..]);
                return Ok(out);
            };
            let token = &after[..close];
            let resolver = self
                .resolvers
                .get(token)
                .ok_or_else(|| Error::UnknownToken(token.to_string()))?;
            out.push_str(&resolver(ctx));
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

fn ansi(command: impl Command) -> String {
    let mut out = String::new();
    let _ = command.write_ansi(&mut out);
    out
}
