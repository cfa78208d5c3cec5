//! Manual measurement worksheet
//!
//! Printed when the binary was built without the `inspect` feature, or on
//! request via `--manual`. Walks a person through measuring the template
//! in a viewer instead of reading it programmatically.

use layout::LayoutProfile;

pub fn print(profile: &LayoutProfile) {
    println!("=== Manual Template Measurement ===");
    println!();
    println!("1. Open the certificate template in a viewer with a measuring tool.");
    println!("2. Note the page size. PDF coordinates start at the bottom-left");
    println!("   corner (0,0) and are measured in points (1/72 inch).");
    println!("3. Measure and write down a position for each entry below:");
    for anchor in &profile.anchors {
        match &anchor.hint {
            Some(hint) => println!("   - {} ({hint})", anchor.label),
            None => println!("   - {}", anchor.label),
        }
    }
    println!("4. Carry the measured coordinates into your layout profile.");
}
