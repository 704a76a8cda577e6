// ABOUTME: Built-in leaf widgets that can be attached to panes by name.
// ABOUTME: A clock showing the local time and a label showing the pane name.

use chrono::NaiveTime;
use termpane_layout::Pane;
use termpane_terminal::CursorWriter;

/// Names accepted in the `widget` field of a pane config
pub const WIDGETS: &[&str] = &["clock", "label"];

/// Attach the widget called `name` to `pane`. Returns false for unknown names.
pub fn attach(pane: &mut Pane, name: &str) -> bool {
    match name {
        "clock" => Clock::init_pane(pane),
        "label" => Label::init_pane(pane),
        _ => return false,
    }
    true
}

/// Prints the current time at the top left of its pane on every tick
pub struct Clock;

impl Clock {
    const FORMAT: &'static str = "%H:%M:%S";

    pub fn init_pane(pane: &mut Pane) {
        pane.set_min_width(pane.min_width().max(5));
        pane.set_min_height(pane.min_height().max(3));
        pane.set_on_draw(Self::run);
        pane.set_on_iterate(Self::run);
    }

    pub fn text(time: NaiveTime) -> String {
        time.format(Self::FORMAT).to_string()
    }

    fn run(pane: &Pane, out: &mut dyn CursorWriter) {
        let now = chrono::Local::now().time();
        pane.write(out, 0, 0, &Self::text(now), false);
    }
}

/// Prints the pane name once per redraw, cut to the inner width
pub struct Label;

impl Label {
    pub fn init_pane(pane: &mut Pane) {
        pane.set_on_draw(Self::run);
    }

    fn run(pane: &Pane, out: &mut dyn CursorWriter) {
        if pane.inner_height() == 0 {
            return;
        }
        let text: String = pane.name().chars().take(pane.inner_width()).collect();
        if !text.is_empty() {
            pane.write(out, 0, 0, &text, false);
        }
    }
}
