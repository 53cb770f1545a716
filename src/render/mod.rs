pub mod summary;

use crate::api::types::ResultRecord;
use crate::highlight;
use crate::html::escape_html;

/// Render result records as the `<li>` fragment sequence a results list is
/// populated with. Records keep server order.
pub fn render_results(records: &[ResultRecord], query: &str) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&render_entry(record, query));
    }
    out
}

/// One result entry. Title and summary are escaped before highlighting so
/// the emphasis tags are the only markup that survives from the record.
fn render_entry(record: &ResultRecord, query: &str) -> String {
    let url = escape_html(&record.url);
    let title = highlight::highlight(&escape_html(&record.title), query);
    let summary = highlight::highlight(&escape_html(&resolve_summary(record, query)), query);

    format!(
        "<li class=\"search-result\">\n  \
         <h2><a href=\"{url}\">{title}</a></h2>\n  \
         <small class=\"meta\">{url}</small>\n  \
         <div class=\"summary\">{summary}</div>\n\
         </li>\n"
    )
}

/// A record's summary, or one derived from its document text, or nothing.
fn resolve_summary(record: &ResultRecord, query: &str) -> String {
    if let Some(summary) = &record.summary {
        return summary.clone();
    }
    match &record.text {
        Some(text) => summary::extract_window(text, &highlight::stem_terms(query)),
        None => String::new(),
    }
}
