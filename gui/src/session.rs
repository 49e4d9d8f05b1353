use std::io::{self, Write};

/// Something the user can press.
pub trait Clickable {
    fn label(&self) -> &'static str;

    /// Runs the control's handler, writing its output line to `out`.
    fn on_activate(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Side of the window a control lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionControl {
    Create,
    Join,
}

impl SessionControl {
    /// Every control, left to right.
    pub const ALL: [SessionControl; 2] = [SessionControl::Create, SessionControl::Join];

    pub fn region(self) -> Region {
        match self {
            SessionControl::Create => Region::Left,
            SessionControl::Join => Region::Right,
        }
    }

    pub fn pressed_line(self) -> &'static str {
        match self {
            SessionControl::Create => "Create button pressed",
            SessionControl::Join => "Join button pressed",
        }
    }
}

impl Clickable for SessionControl {
    fn label(&self) -> &'static str {
        match self {
            SessionControl::Create => "Create PeersChat Session",
            SessionControl::Join => "Join PeersChat Session",
        }
    }

    fn on_activate(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.pressed_line())?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_two_controls_with_launcher_labels() {
        let labels: Vec<_> = SessionControl::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["Create PeersChat Session", "Join PeersChat Session"]);
    }

    #[test]
    fn create_sits_left_and_join_sits_right() {
        assert_eq!(SessionControl::Create.region(), Region::Left);
        assert_eq!(SessionControl::Join.region(), Region::Right);
    }

    #[test]
    fn activation_writes_a_single_line() {
        let mut out = Vec::new();
        SessionControl::Join.on_activate(&mut out).unwrap();
        assert_eq!(out, b"Join button pressed\n");
    }
}
