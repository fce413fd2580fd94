use similar::{ChangeTag, TextDiff};

/// Lines of unchanged context kept around each change.
const CONTEXT_RADIUS: usize = 3;

/// Render a line diff between `want` and `got`.
///
/// Lines only in `want` are prefixed with `-`, lines only in `got` with `+`.
/// Returns an empty string if the inputs are identical.
pub(crate) fn unified(want: &str, got: &str) -> String {
    let diff = TextDiff::from_lines(want, got);
    let mut out = String::new();

    for (index, group) in diff.grouped_ops(CONTEXT_RADIUS).iter().enumerate() {
        if index > 0 {
            out.push_str("...\n");
        }

        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => '-',
                    ChangeTag::Insert => '+',
                    ChangeTag::Equal => ' ',
                };

                out.push(sign);
                out.push_str(change.value());

                if change.missing_newline() {
                    out.push('\n');
                }
            }
        }
    }

    out
}
