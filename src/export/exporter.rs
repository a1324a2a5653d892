//! Reflective tabular export.
//!
//! Serializes an ordered record sequence into a workbook document: a header
//! row from humanized field names, one row per record in input order, and a
//! trailing provenance row, then the whole document as a BIFF worksheet
//! stream on the caller's sink.

use std::io::Write;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::biff;
use crate::schema::{FieldAccessError, FieldType, FieldValue, HeaderCache, Record};
use crate::util::Result;

use super::{CellStyles, ExportDocument, Row};

type Humanizer = Box<dyn Fn(&str) -> String + Send + Sync>;
type Provenance = Box<dyn Fn(DateTime<Tz>, &str) -> String + Send + Sync>;
type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Writes record sequences as legacy binary workbooks.
///
/// Every step is a replaceable strategy: header humanization
/// ([`with_humanizer`](Self::with_humanizer)), per-type cell styling
/// ([`with_style`](Self::with_style)), the provenance line
/// ([`with_provenance`](Self::with_provenance)) and the clock behind it
/// ([`with_clock`](Self::with_clock)). Callers that need a different body
/// layout can assemble an [`ExportDocument`] directly and hand it to
/// [`biff::write_worksheet`].
pub struct Exporter {
    styles: CellStyles,
    humanizer: Humanizer,
    provenance: Provenance,
    clock: Clock,
    zone: Tz,
    headers: HeaderCache,
}

impl Exporter {
    /// Exporter with standard styles, UTC provenance timestamps and the
    /// system clock.
    pub fn new() -> Self {
        Self {
            styles: CellStyles::standard(),
            humanizer: Box::new(|name| humanize_header(name)),
            provenance: Box::new(default_provenance),
            clock: Box::new(Utc::now),
            zone: Tz::UTC,
            headers: HeaderCache::new(),
        }
    }

    /// Zone used to render provenance timestamps.
    pub fn with_zone(mut self, zone: Tz) -> Self {
        self.zone = zone;
        self
    }

    /// Insert or replace a per-type style rule.
    pub fn with_style(
        mut self,
        ty: FieldType,
        rule: impl Fn(&FieldValue) -> String + Send + Sync + 'static,
    ) -> Self {
        self.styles.insert(ty, rule);
        self
    }

    /// Replace the header humanizer. Clears the per-type label cache.
    pub fn with_humanizer(
        mut self,
        humanizer: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.humanizer = Box::new(humanizer);
        self.headers = HeaderCache::new();
        self
    }

    /// Replace the provenance line. The closure receives the current time
    /// in the configured zone and the requesting identity.
    pub fn with_provenance(
        mut self,
        provenance: impl Fn(DateTime<Tz>, &str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.provenance = Box::new(provenance);
        self
    }

    /// Replace the clock; provenance timestamps come from here.
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Build the in-memory document for `records`.
    ///
    /// Unreadable fields degrade to empty cells; their access errors come
    /// back in the diagnostics list next to the document, and are logged.
    pub fn build<T: Record + 'static>(
        &self,
        records: &[T],
        requested_by: &str,
    ) -> (ExportDocument, Vec<FieldAccessError>) {
        let fields = T::fields();
        let mut document = ExportDocument::new();
        let mut skipped = Vec::new();

        let labels = self.headers.labels::<T>(&self.humanizer);
        document.push_row(Row::from_cells(labels.to_vec()));

        for record in records {
            let mut row = Row::new();
            for field in fields {
                match record.field(field.ordinal) {
                    Ok(Some(value)) => row.push(self.styles.render(field.ty, &value)),
                    Ok(None) => row.push(""),
                    Err(err) => {
                        warn!(field = field.name, %err, "field skipped during export");
                        row.push("");
                        skipped.push(err);
                    }
                }
            }
            document.push_row(row);
        }

        let now = (self.clock)().with_timezone(&self.zone);
        let mut trailer = Row::new();
        trailer.push((self.provenance)(now, requested_by));
        document.push_row(trailer);

        debug!(
            rows = document.num_rows(),
            fields = fields.len(),
            "export document built"
        );
        (document, skipped)
    }

    /// Build the document and serialize it to `sink` as a BIFF worksheet
    /// stream.
    ///
    /// The sink stays open; flushing and closing it is the caller's
    /// scoped-resource discipline. Returns the non-fatal field diagnostics;
    /// sink failures propagate.
    pub fn write<T: Record + 'static, W: Write>(
        &self,
        records: &[T],
        sink: &mut W,
        requested_by: &str,
    ) -> Result<Vec<FieldAccessError>> {
        let (document, skipped) = self.build(records, requested_by);
        biff::write_worksheet(&document, sink)?;
        Ok(skipped)
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Humanize a field name into a header label.
///
/// Words split at lowercase-to-uppercase and letter/digit transitions; a
/// run of uppercase letters stays one word until a lowercase letter ends
/// it (`totalAmountUSD` is `Total Amount USD`, `USDAmount` is
/// `USD Amount`). Each word gets its first letter capitalized and words
/// join with single spaces.
pub fn humanize_header(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut words: SmallVec<[String; 8]> = SmallVec::new();
    let mut start = 0;

    for i in 1..chars.len() {
        let prev = chars[i - 1];
        let c = chars[i];
        let acronym_end = prev.is_uppercase() && c.is_lowercase() && i - start > 1;
        let split = (prev.is_lowercase() && c.is_uppercase())
            || prev.is_ascii_digit() != c.is_ascii_digit()
            || acronym_end;
        if split {
            // The last capital of a run belongs to the next word.
            let at = if acronym_end { i - 1 } else { i };
            if at > start {
                words.push(chars[start..at].iter().collect());
                start = at;
            }
        }
    }
    if start < chars.len() {
        words.push(chars[start..].iter().collect());
    }

    let mut label = String::with_capacity(name.len() + words.len());
    for (idx, word) in words.iter().enumerate() {
        if idx > 0 {
            label.push(' ');
        }
        let mut rest = word.chars();
        if let Some(first) = rest.next() {
            label.extend(first.to_uppercase());
            label.extend(rest);
        }
    }
    label
}

/// Default provenance line, timestamp pattern `MM/dd/yyyy 'at' hh:mm:ss a`.
fn default_provenance(now: DateTime<Tz>, requested_by: &str) -> String {
    format!(
        "Report requested on {} by {}",
        now.format("%m/%d/%Y at %I:%M:%S %p"),
        requested_by
    )
}
