//! Pagination rules rendered into every generated `extensions/pagination.ts`.
//!
//! A `limit` or `offset` query value counts only when it is a plain string
//! of ASCII digits ([`PAGE_PARAM_PATTERN`]). Signs, exponents, fractions,
//! hex literals, surrounding whitespace and repeated parameters all fall
//! back to the default. Oversized values clamp to the maximum instead.
//!
//! | Parameter | Default | Zero      | Maximum             |
//! |-----------|---------|-----------|---------------------|
//! | `limit`   | 20      | default   | 100                 |
//! | `offset`  | 0       | 0         | 2^53 - 1            |

/// Page size when the request does not ask for a usable one.
pub const DEFAULT_PAGE_LIMIT: u64 = 20;
/// Upper bound on any requested page size.
pub const MAX_PAGE_LIMIT: u64 = 100;
/// Largest offset a JavaScript number holds exactly (`Number.MAX_SAFE_INTEGER`).
pub const MAX_PAGE_OFFSET: u64 = 9_007_199_254_740_991;
/// Body of the regular expression a query value must match.
pub const PAGE_PARAM_PATTERN: &str = "^[0-9]+$";

/// Constants and the `parseLimit` helper shared by both pagination styles.
pub fn limit_parser() -> String {
    format!(
        "export const DEFAULT_PAGE_LIMIT = {DEFAULT_PAGE_LIMIT};
export const MAX_PAGE_LIMIT = {MAX_PAGE_LIMIT};
const PAGE_PARAM = /{PAGE_PARAM_PATTERN}/;

function parseLimit(raw: unknown): number {{
  if (typeof raw !== 'string' || !PAGE_PARAM.test(raw)) {{
    return DEFAULT_PAGE_LIMIT;
  }}
  const n = Number.parseInt(raw, 10);
  return n === 0 ? DEFAULT_PAGE_LIMIT : Math.min(n, MAX_PAGE_LIMIT);
}}
"
    )
}

/// `parseOffset`; expects [`limit_parser`] earlier in the same module.
pub fn offset_parser() -> String {
    format!(
        "const MAX_PAGE_OFFSET = {MAX_PAGE_OFFSET};

function parseOffset(raw: unknown): number {{
  if (typeof raw !== 'string' || !PAGE_PARAM.test(raw)) {{
    return 0;
  }}
  return Math.min(Number.parseInt(raw, 10), MAX_PAGE_OFFSET);
}}
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_bound_is_the_largest_exact_js_integer() {
        assert_eq!(MAX_PAGE_OFFSET, (1u64 << 53) - 1);
    }

    #[test]
    fn parsers_interpolate_constants() {
        let limit = limit_parser();
        assert!(limit.starts_with("export const DEFAULT_PAGE_LIMIT = 20;\n"));
        assert!(limit.contains("export const MAX_PAGE_LIMIT = 100;\n"));
        assert!(limit.contains("const PAGE_PARAM = /^[0-9]+$/;\n"));
        assert!(offset_parser().starts_with("const MAX_PAGE_OFFSET = 9007199254740991;\n"));
    }
}
