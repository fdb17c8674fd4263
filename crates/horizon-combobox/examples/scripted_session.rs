//! Replays a scripted editing session against every combobox variant.
//!
//! Run with `RUST_LOG=horizon_combobox=debug` to see the engine's tracing
//! output interleaved with the listings.

use horizon_combobox::{Combobox, Key, SnapshotDebug, Variant};
use tracing_subscriber::EnvFilter;

const FRUIT: [&str; 15] = [
    "Apple",
    "Apricot",
    "Avocado",
    "Banana",
    "Blackberry",
    "Blueberry",
    "Cantaloupe",
    "Cherry",
    "Coconut",
    "Date",
    "Durian",
    "Fig",
    "Grape",
    "Kiwi",
    "Lemon",
];

/// One step of the session.
enum Step {
    Type(&'static str),
    Press(&'static str),
    Click,
    PickOption(usize),
    Blur,
}

const SCRIPT: &[Step] = &[
    Step::Click,
    Step::Type("b"),
    Step::Type("bl"),
    Step::Press("ArrowDown"),
    Step::Press("Escape"),
    Step::Type("c"),
    Step::Press("End"),
    Step::Press("Enter"),
    Step::Type("xyz"),
    Step::Press("ArrowDown"),
    Step::Type(""),
    Step::Blur,
    Step::Click,
    Step::PickOption(11),
];

fn describe(step: &Step) -> String {
    match step {
        Step::Type(text) => format!("type {text:?}"),
        Step::Press(key) => format!("press {key}"),
        Step::Click => "click input".to_string(),
        Step::PickOption(index) => format!("pick option {index}"),
        Step::Blur => "blur".to_string(),
    }
}

fn run(variant: Variant, debug: &SnapshotDebug) {
    let mut combo = Combobox::new(FRUIT, variant).with_id_base("fruit");
    combo
        .option_selected
        .connect(|(index, value)| println!("  -> committed #{index} {value:?}"));

    println!("=== {variant} ===");
    for step in SCRIPT {
        println!("> {}", describe(step));
        match *step {
            Step::Type(text) => combo.on_type(text),
            Step::Press(name) => {
                let consumed = combo.on_key_down(Key::from_name(name));
                if consumed {
                    println!("  (key consumed)");
                }
            }
            Step::Click => combo.on_click(),
            Step::PickOption(index) => {
                combo.on_option_pointer_down();
                combo.on_blur();
                combo.on_option_click(index);
            }
            Step::Blur => combo.on_blur(),
        }
        print!("{}", debug.display(&combo.snapshot()));
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let debug = SnapshotDebug::with_options(horizon_combobox::ListingFormatOptions::visible_only());
    for variant in Variant::ALL {
        run(variant, &debug);
    }
}
