/// sluk-core: the engine behind the `sluk` symbol lookup tool
///
/// Given a search phrase, this library scans a database of
/// `CODEPOINT ; DESCRIPTION` records (the UCD derived-name format),
/// finds descriptions that match exactly or fuzzily, ranks them by
/// match quality, and decodes the winning code points back into
/// printable characters.
///
/// ## The pipeline
///
/// - [`record`]: one line in, one `(code, description)` pair out.
///   Blank and `#` comment lines are skipped; anything else without a
///   `;` delimiter is a hard error.
/// - [`query`]: the matcher. Exact mode wants description equality;
///   fuzzy mode scores the whole search term against each word of a
///   description and keeps the closest word's edit distance.
/// - [`search`]: streams a database through the matcher, collects the
///   survivors, and stable-sorts them so closer matches surface first
///   and ties keep their input order.
/// - [`codepoint`]: hex string to `char` and back to the
///   `'\U0001F600'` escape-literal spelling.
/// - [`output`]: JSON / NDJSON serialization of result lists.
/// - [`dataset`]: where the database text comes from — a bundled UCD
///   extract or a user-supplied file.
///
/// ## A sample conversation
///
/// ```rust
/// use sluk_core::dataset::DataSource;
/// use sluk_core::query::SearchQuery;
/// use sluk_core::search::search;
///
/// let query = SearchQuery::new(&["white", "heavy", "check"], false);
/// let db = DataSource::Embedded.load()?;
/// let matches = search(&db, &query)?;
///
/// for m in &matches {
///     println!("{}\t{}", m.code, m.description);
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub mod codepoint;
pub mod dataset;
pub mod output;
pub mod query;
pub mod record;
pub mod search;
