//! Page rendering for the generated endpoint list.
//!
//! The page is the static header, the `<ul>` list markup and the static
//! footer, parsed together as one template. Each record becomes one `<li>`;
//! aliases are rendered as a parenthetical of `or <code>alias</code>`
//! clauses separated by single spaces.

use crate::core::template::Template;
use crate::core::ServiceRecord;
use crate::utils::error::Result;
use std::collections::HashMap;

pub const PAGE_HEADER: &str = include_str!("../../templates/header.md");
pub const SERVICE_LIST: &str = include_str!("../../templates/service_list.html");
pub const PAGE_FOOTER: &str = include_str!("../../templates/footer.md");

const ITEM: &str = "\n  <li><code>{{ name }}</code>{{ alias_clause }}</li>";
const ALIAS: &str = "or <code>{{ alias }}</code>";

pub struct Renderer {
    page: Template,
    item: Template,
    alias: Template,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        Self::with_page(&format!("{}{}{}", PAGE_HEADER, SERVICE_LIST, PAGE_FOOTER))
    }

    /// Renderer around a custom page; it must bind `{{ services }}` only.
    pub fn with_page(page: &str) -> Result<Self> {
        Ok(Self {
            page: Template::parse("page", page)?,
            item: Template::parse("item", ITEM)?,
            alias: Template::parse("alias", ALIAS)?,
        })
    }

    pub fn render(&self, records: &[ServiceRecord]) -> Result<String> {
        let services = self.render_items(records)?;
        self.page
            .render(&HashMap::from([("services", services.as_str())]))
    }

    pub fn render_items(&self, records: &[ServiceRecord]) -> Result<String> {
        let mut out = String::new();
        for record in records {
            out.push_str(&self.render_item(record)?);
        }
        Ok(out)
    }

    pub fn render_item(&self, record: &ServiceRecord) -> Result<String> {
        let alias_clause = if record.aliases.is_empty() {
            String::new()
        } else {
            let clauses = record
                .aliases
                .iter()
                .map(|alias| self.alias.render(&HashMap::from([("alias", alias.as_str())])))
                .collect::<Result<Vec<_>>>()?;
            format!(" ({})", clauses.join(" "))
        };

        self.item.render(&HashMap::from([
            ("name", record.name.as_str()),
            ("alias_clause", alias_clause.as_str()),
        ]))
    }
}
