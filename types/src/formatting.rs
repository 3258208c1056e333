//! Centralized display formatting utilities.
//!
//! All player-facing text formatting goes through this module so the
//! overlay table and any future surfaces render entries identically.

/// Format a player name with their home world for display.
///
/// Players whose world could not be resolved carry the `"Unknown"`
/// placeholder; in that case (or when the world is empty) only the bare
/// name is shown rather than a noisy `Name @ Unknown`.
///
/// # Examples
/// ```
/// use sproutwatch_types::formatting::display_name;
/// assert_eq!(display_name("Lilja Vennel", "Cerberus"), "Lilja Vennel @ Cerberus");
/// assert_eq!(display_name("Lilja Vennel", "Unknown"), "Lilja Vennel");
/// assert_eq!(display_name("Lilja Vennel", ""), "Lilja Vennel");
/// ```
pub fn display_name(name: &str, world: &str) -> String {
    if world.is_empty() || world == "Unknown" {
        name.to_string()
    } else {
        format!("{name} @ {world}")
    }
}

/// Format a distance in game units (yalms) for the nearby table.
///
/// One decimal is enough at overlay reading distance; sub-yalm precision
/// is noise.
///
/// # Examples
/// ```
/// use sproutwatch_types::formatting::format_distance;
/// assert_eq!(format_distance(5.0), "5.0y");
/// assert_eq!(format_distance(12.34), "12.3y");
/// ```
pub fn format_distance(yalms: f32) -> String {
    format!("{yalms:.1}y")
}
