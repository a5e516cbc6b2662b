// SPDX-License-Identifier: MPL-2.0
//! Metadata display component.
//!
//! Pure projection of metadata records into a fixed 9-column table, one row
//! per record in input order. An empty sequence renders a single placeholder
//! line instead. The component holds no state and emits no messages.

use crate::extraction::record::MetadataRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{rule, Column, Container, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the table.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub records: &'a [MetadataRecord],
}

/// Relative column widths. Prompt dominates; identifiers and dates get room
/// to breathe; numeric columns stay narrow.
const COLUMN_PORTIONS: [u16; 9] = [4, 1, 1, 2, 1, 1, 3, 3, 2];

const COLUMN_KEYS: [&str; 9] = [
    "table-column-prompt",
    "table-column-width",
    "table-column-height",
    "table-column-origin",
    "table-column-version",
    "table-column-profile",
    "table-column-job-id",
    "table-column-date",
    "table-column-author",
];

/// Render the metadata table, or the placeholder when there is nothing to show.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.records.is_empty() {
        return Text::new(ctx.i18n.tr("table-empty"))
            .size(typography::BODY)
            .into();
    }

    let mut table = Column::new()
        .width(Length::Fill)
        .spacing(spacing::XS)
        .push(header_row(ctx.i18n))
        .push(rule::horizontal(1));

    for record in ctx.records {
        table = table.push(record_row(record));
    }

    Container::new(table)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn header_row<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::SM);
    for (key, portion) in COLUMN_KEYS.iter().zip(COLUMN_PORTIONS) {
        row = row.push(
            Text::new(i18n.tr(key))
                .size(typography::CAPTION)
                .width(Length::FillPortion(portion)),
        );
    }
    row.into()
}

fn record_row<'a, Message: 'a>(record: &MetadataRecord) -> Element<'a, Message> {
    let cells = [
        record.prompt.clone(),
        record.width.to_string(),
        record.height.to_string(),
        record.origin_text(),
        record.version_text(),
        record.profile_text(),
        record.job_id_text(),
        record.date_text(),
        record.author_text(),
    ];

    let mut row = Row::new().spacing(spacing::SM);
    for (content, portion) in cells.into_iter().zip(COLUMN_PORTIONS) {
        row = row.push(
            Text::new(content)
                .size(typography::BODY)
                .width(Length::FillPortion(portion)),
        );
    }
    row.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> MetadataRecord {
        serde_json::from_str(r#"{"prompt":"a cat","width":512,"height":512}"#)
            .expect("record should deserialize")
    }

    #[test]
    fn empty_sequence_renders_placeholder() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            records: &[],
        });
    }

    #[test]
    fn single_record_renders_table() {
        let i18n = I18n::default();
        let records = vec![sample_record()];
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            records: &records,
        });
    }

    #[test]
    fn column_definitions_stay_in_sync() {
        assert_eq!(COLUMN_KEYS.len(), COLUMN_PORTIONS.len());
    }
}
