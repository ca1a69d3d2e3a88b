//! Search filter sent as the `/api/search` request body.

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::{NoticeSource, NoticeStatus, NoticeType};

/// Filter for `/api/search`.
///
/// Every field is optional. Fields left as `None` are omitted from the JSON
/// body entirely; a field set to an empty list is sent as `[]`, which the
/// server may treat differently from an absent field.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,

    /// Notice types, e.g. `Contract`, `Opportunity`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,

    /// Notice statuses, e.g. `Open`, `Closed`, `Awarded`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statuses: Option<Vec<String>>,

    /// Procurement stages, e.g. `Pipeline`, `Planning`, `Tender`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procurement_stages: Option<Vec<String>>,

    /// Inclusive start date, sent as `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,

    /// Inclusive end date, sent as `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,

    /// Source portals, e.g. `CF`, `FTS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
}

fn push(field: &mut Option<Vec<String>>, value: String) {
    field.get_or_insert_with(Vec::new).push(value);
}

fn extend(field: &mut Option<Vec<String>>, values: &[String]) {
    field.get_or_insert_with(Vec::new).extend_from_slice(values);
}

impl SearchFilter {
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        push(&mut self.keywords, keyword.to_string());
        self
    }
    pub fn with_keywords(mut self, keywords: &[String]) -> Self {
        extend(&mut self.keywords, keywords);
        self
    }

    pub fn with_type(mut self, notice_type: NoticeType) -> Self {
        push(&mut self.types, notice_type.to_string());
        self
    }
    pub fn with_types(mut self, types: &[String]) -> Self {
        extend(&mut self.types, types);
        self
    }

    pub fn with_status(mut self, status: NoticeStatus) -> Self {
        push(&mut self.statuses, status.to_string());
        self
    }
    pub fn with_statuses(mut self, statuses: &[String]) -> Self {
        extend(&mut self.statuses, statuses);
        self
    }

    pub fn with_procurement_stage(mut self, stage: &str) -> Self {
        push(&mut self.procurement_stages, stage.to_string());
        self
    }
    pub fn with_procurement_stages(mut self, stages: &[String]) -> Self {
        extend(&mut self.procurement_stages, stages);
        self
    }

    pub fn with_source(mut self, source: NoticeSource) -> Self {
        push(&mut self.sources, source.to_string());
        self
    }
    pub fn with_sources(mut self, sources: &[String]) -> Self {
        extend(&mut self.sources, sources);
        self
    }

    pub fn with_date_from(mut self, date_from: NaiveDate) -> Self {
        self.date_from = Some(date_from);
        self
    }
    pub fn with_date_to(mut self, date_to: NaiveDate) -> Self {
        self.date_to = Some(date_to);
        self
    }

    /// Sets both ends of the date window.
    pub fn with_date_range(self, date_from: NaiveDate, date_to: NaiveDate) -> Self {
        self.with_date_from(date_from).with_date_to(date_to)
    }
}
