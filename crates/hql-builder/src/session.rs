//! Execution handoff to an external query session.
//!
//! The builder owns only text and parameter bookkeeping; preparing and
//! executing the query belongs to a collaborator (an ORM session, a statement
//! cache, a test double). [`Session`] is that boundary.

use crate::value::Value;

/// An execution-side collaborator that prepares queries and binds named
/// parameters.
///
/// The builder hands over the accumulated query text unchanged, then binds
/// every accumulated parameter by name. Result iteration stays on the session
/// side.
pub trait Session {
    /// Handle to a prepared query.
    type Query;

    /// Error raised by the session while preparing or binding.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Prepare a query from text.
    fn create_query(&self, text: &str) -> Result<Self::Query, Self::Error>;

    /// Prepare a query from text with a declared result entity.
    ///
    /// The default implementation ignores `result_type` and calls
    /// [`Session::create_query`].
    fn create_query_as(&self, text: &str, result_type: &str) -> Result<Self::Query, Self::Error> {
        let _ = result_type;
        self.create_query(text)
    }

    /// Bind a named parameter on a prepared query.
    fn set_param(
        &self,
        query: &mut Self::Query,
        name: &str,
        value: &Value,
    ) -> Result<(), Self::Error>;
}
