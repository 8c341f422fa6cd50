//! Parallel array alignment

/// Pair up two ragged parallel sequences by index
///
/// The result is as long as the longer input. A position that is past the
/// end of a sequence, or null in it, yields an empty string on that side.
pub fn align<N, S>(names: &[Option<N>], statuses: &[Option<S>]) -> Vec<(String, String)>
where
    N: AsRef<str>,
    S: AsRef<str>,
{
    let len = names.len().max(statuses.len());
    (0..len)
        .map(|i| (cell(names, i), cell(statuses, i)))
        .collect()
}

fn cell<T: AsRef<str>>(seq: &[Option<T>], index: usize) -> String {
    seq.get(index)
        .and_then(Option::as_ref)
        .map(|v| v.as_ref().to_string())
        .unwrap_or_default()
}
