//! Service link output formatter

use serde::Serialize;

use super::common::{output_rows, Tabular};
use crate::cli::OutputFormat;
use crate::rollbar::ServiceLink;

#[derive(Serialize)]
struct ServiceLinkRow {
    id: i64,
    name: String,
    template: String,
}

impl From<&ServiceLink> for ServiceLinkRow {
    fn from(link: &ServiceLink) -> Self {
        Self {
            id: link.id,
            name: link.name.clone(),
            template: link.template.clone(),
        }
    }
}

impl Tabular for ServiceLinkRow {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "TEMPLATE"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone(), self.template.clone()]
    }
}

/// Output service links in the specified format
pub fn output_service_links(links: &[ServiceLink], format: OutputFormat, no_header: bool) {
    let rows: Vec<ServiceLinkRow> = links.iter().map(ServiceLinkRow::from).collect();
    output_rows(&rows, format, no_header);
}
