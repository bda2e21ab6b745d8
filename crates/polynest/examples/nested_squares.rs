//! Solve the nested-squares presets with every predicate.
//!
//! Usage:
//!   cargo run -p polynest --example nested_squares

use polynest::generate::Preset;
use polynest::inclusion::{solve_with_method, SolveCfg};
use polynest::pip::Method;

fn main() {
    for preset in [Preset::Multiple, Preset::Complex] {
        let polys = preset.polygons();
        for m in Method::ALL {
            match solve_with_method(&polys, m, &SolveCfg::default()) {
                Ok(mapping) => println!("{preset:<8} {m:<7} {mapping}"),
                Err(e) => eprintln!("{preset}: {e}"),
            }
        }
    }
}
