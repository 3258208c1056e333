//! Text rendering of a snapshot.
//!
//! A terminal stand-in for the overlay window: same sections, same row
//! contents, no drawing. Colors from the config are intentionally not
//! applied here; they are pass-through data for a graphical front end.

use sproutwatch_core::{ClassifiedPlayer, OverlayConfig, Snapshot, jobs};
use sproutwatch_types::formatting::{display_name, format_distance};

/// Render the overlay as text. `visible` is the window toggle; the
/// in-combat auto-hide decision is made by the caller via
/// `sproutwatch_core::should_display`.
pub fn render(snapshot: &Snapshot, config: &OverlayConfig, visible: bool) -> String {
    if !visible {
        return "(overlay hidden - `toggle` to show)\n".to_string();
    }

    let mut out = String::new();
    if config.show_welcome_message {
        out.push_str("Welcome to Sproutwatch! Newcomers and returners near you:\n");
    }

    if config.show_party {
        out.push_str("== Party ==\n");
        push_rows(&mut out, &snapshot.party, config, false);
    }
    if config.show_nearby {
        out.push_str("== Nearby ==\n");
        push_rows(&mut out, &snapshot.nearby, config, true);
    }
    out
}

fn push_rows(out: &mut String, rows: &[ClassifiedPlayer], config: &OverlayConfig, with_distance: bool) {
    if rows.is_empty() {
        out.push_str("  (none)\n");
        return;
    }
    for row in rows {
        out.push_str("  [");
        out.push_str(row.status_label());
        out.push_str("] ");
        out.push_str(&display_name(&row.name, &row.world_name));
        if config.show_job_icons {
            out.push_str(&format!(" ({})", jobs::job_abbr(row.job_id)));
        }
        if with_distance {
            out.push_str(&format!(" {}", format_distance(row.distance)));
        }
        out.push('\n');
    }
}
