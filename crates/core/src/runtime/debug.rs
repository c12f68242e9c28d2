use tracing::warn;

use crate::constants::DEBUG_PROPERTY;
use crate::context::BuildContext;

/// Lenient boolean parse: only `true`, ignoring ASCII case, is true.
pub fn parse_lenient_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// Resolve the debug flag for a context.
///
/// The property is read on the first call only; the result stays fixed for
/// the lifetime of the context.
pub fn resolve_debug(context: &BuildContext) -> bool {
    *context.debug_cell().get_or_init(|| match context.property(DEBUG_PROPERTY) {
        None => false,
        Some(raw) => {
            let enabled = parse_lenient_bool(raw);
            if !enabled && !raw.eq_ignore_ascii_case("false") {
                warn!("Ignoring malformed value '{raw}' for {DEBUG_PROPERTY}, debug stays off");
            }
            enabled
        }
    })
}
