//! Line-oriented query composition with named parameters.
//!
//! [`HqlBuilder`] complements hand-written query strings:
//! - every `push`/`add` call contributes one line (lines join with `\n`),
//! - `:name` placeholders in a fragment bind the call's values positionally,
//! - a bare `:` placeholder is renamed to a synthetic `_param_N`,
//! - `add_next_if(false)` drops the next line and its bindings in one shot.
//!
//! # Example
//!
//! ```
//! use hql_builder::{HqlBuilder, params};
//!
//! let include_house_filter = false;
//!
//! let mut q = HqlBuilder::new();
//! q.push("SELECT id, street, city")?;
//! q.push("FROM Address")?;
//! q.push("WHERE")?;
//! q.add("  userId = :userId", params![11_i64])?;
//! q.add_next_if(include_house_filter);
//! q.add("  AND houseNo > :houseNo", params![2_i64])?;
//!
//! assert_eq!(
//!     q.query_text(),
//!     "SELECT id, street, city\nFROM Address\nWHERE\n  userId = :userId"
//! );
//! # Ok::<(), hql_builder::HqlError>(())
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{HqlError, HqlResult};
use crate::param::next_param;
use crate::session::Session;
use crate::value::Value;

/// A line-oriented builder for query strings with named parameters.
///
/// The builder accumulates query text line by line and a name→value parameter
/// map, rewriting anonymous placeholders to synthetic names as values are
/// bound. It is a short-lived, single-owner accumulator: build it, then hand
/// it to a [`Session`] or read the text and parameters out.
#[derive(Debug)]
pub struct HqlBuilder {
    text: String,
    params: BTreeMap<String, Value>,
    add_next: bool,
    first_line: bool,
    anon_seq: u32,
}

/// Start a builder from an initial line, binding nothing.
///
/// Placeholders in `text` are left intact for later [`HqlBuilder::set_param`]
/// calls. Fails only when the first placeholder in `text` is a bare `:`,
/// which always requires a value.
pub fn hql(text: &str) -> HqlResult<HqlBuilder> {
    let mut qb = HqlBuilder::new();
    qb.push(text)?;
    Ok(qb)
}

impl HqlBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            params: BTreeMap::new(),
            add_next: true,
            first_line: true,
            anon_seq: 0,
        }
    }

    /// Create a builder from an initial line and its parameter values.
    pub fn with<I>(text: &str, values: I) -> HqlResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut qb = Self::new();
        qb.add(text, values)?;
        Ok(qb)
    }

    /// Append one line without values (deferred binding).
    ///
    /// `:name` placeholders are kept verbatim; bind them later with
    /// [`HqlBuilder::set_param`]. A bare `:` as the first placeholder is an
    /// error here since only a value can give it a name.
    pub fn push(&mut self, text: &str) -> HqlResult<&mut Self> {
        self.append(text, Vec::new())
    }

    /// Append one line and bind its placeholders to `values` left to right.
    ///
    /// A bare `:` placeholder is renamed to a synthetic `_param_N`; named
    /// placeholders re-emit unchanged. Values beyond the placeholders found
    /// are silently unused. Use the [`params!`](crate::params) macro for
    /// heterogeneous value lists.
    pub fn add<I>(&mut self, text: &str, values: I) -> HqlResult<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.append(text, values)
    }

    /// Suppress the next `push`/`add` call unless `condition` holds.
    ///
    /// One-shot gate: the suppressed call contributes neither text nor
    /// bindings, and the gate rearms afterwards either way.
    pub fn add_next_if(&mut self, condition: bool) -> &mut Self {
        self.add_next = condition;
        self
    }

    /// Bind or overwrite a parameter value directly, without scanning.
    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// The accumulated query text, newline-joined, with placeholders
    /// normalized to named form wherever values were supplied.
    pub fn query_text(&self) -> &str {
        &self.text
    }

    /// The accumulated name→value parameter map.
    pub fn params(&self) -> &BTreeMap<String, Value> {
        &self.params
    }

    /// Whether any line has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.first_line
    }

    /// Render the query text with literal values substituted for
    /// placeholders; unbound or null-valued parameters render as `NULL`.
    ///
    /// Debug aid only: values are not quoted or escaped, so the output must
    /// never be executed against a data store.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Hand the accumulated text and bindings to a session.
    pub fn build<S: Session>(&self, session: &S) -> HqlResult<S::Query> {
        let mut query = session
            .create_query(&self.text)
            .map_err(HqlError::create_query)?;
        self.bind_params(session, &mut query)?;
        Ok(query)
    }

    /// Hand the accumulated text and bindings to a session, declaring the
    /// result entity.
    pub fn build_as<S: Session>(&self, session: &S, result_type: &str) -> HqlResult<S::Query> {
        let mut query = session
            .create_query_as(&self.text, result_type)
            .map_err(HqlError::create_query)?;
        self.bind_params(session, &mut query)?;
        Ok(query)
    }

    fn bind_params<S: Session>(&self, session: &S, query: &mut S::Query) -> HqlResult<()> {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            text_len = self.text.len(),
            params = self.params.len(),
            "binding query parameters"
        );
        for (name, value) in &self.params {
            session
                .set_param(query, name, value)
                .map_err(|source| HqlError::bind(name, value.to_string(), source))?;
        }
        Ok(())
    }

    /// Take the one-shot gate: `false` means this append is suppressed.
    fn take_add_next(&mut self) -> bool {
        if self.add_next {
            true
        } else {
            self.add_next = true;
            false
        }
    }

    fn append(&mut self, text: &str, values: Vec<Value>) -> HqlResult<&mut Self> {
        if !self.take_add_next() {
            return Ok(self);
        }

        // Rewrite into locals first; the builder must stay untouched when the
        // fragment fails to scan.
        let mut rewritten = String::with_capacity(text.len());
        let mut binds: Vec<(String, Value)> = Vec::with_capacity(values.len());
        let mut seq = self.anon_seq;
        let mut tail = 0;
        let mut from = 0;
        let mut pos = 0;

        while let Some(p) = next_param(text, from) {
            if pos >= values.len() {
                if p.name.is_empty() {
                    return Err(HqlError::UnnamedWithoutValue {
                        offset: p.start - 1,
                        fragment: text.to_string(),
                    });
                }
                if values.is_empty() {
                    // Deferred binding: keep the rest of the fragment verbatim.
                    break;
                }
                return Err(HqlError::MissingValue {
                    name: p.name.to_string(),
                    fragment: text.to_string(),
                });
            }

            let name = if p.name.is_empty() {
                seq += 1;
                format!("_param_{seq}")
            } else {
                p.name.to_string()
            };
            // `p.start` points past the colon, so this keeps the colon itself.
            rewritten.push_str(&text[tail..p.start]);
            rewritten.push_str(&name);
            binds.push((name, values[pos].clone()));
            tail = p.end;
            from = p.end;
            pos += 1;
        }
        rewritten.push_str(&text[tail..]);

        #[cfg(feature = "tracing")]
        tracing::trace!(fragment = text, bound = binds.len(), "appended fragment");

        self.anon_seq = seq;
        if self.first_line {
            self.first_line = false;
        } else {
            self.text.push('\n');
        }
        self.text.push_str(&rewritten);
        self.params.extend(binds);
        Ok(self)
    }
}

impl Default for HqlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The debug rendering of [`HqlBuilder::render`].
impl fmt::Display for HqlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.text.as_str();
        let mut tail = 0;
        let mut from = 0;
        while let Some(p) = next_param(text, from) {
            f.write_str(&text[tail..p.start - 1])?;
            match self.params.get(p.name) {
                Some(value) if !value.is_null() => write!(f, "{value}")?,
                _ => f.write_str("NULL")?,
            }
            tail = p.end;
            from = p.end;
        }
        f.write_str(&text[tail..])
    }
}
