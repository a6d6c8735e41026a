//! FILENAME: core/engine/src/position.rs
//! PURPOSE: The closed set of named positions that make up the Pinnacle.
//! CONTEXT: Every value the engine produces lives at one of these 24
//! single-letter positions. The letter is the public key used by diagram
//! layouts and JSON consumers; the title is the label shown next to it.
//! Declaration order is alphabetical, which is also the table order.

use serde::{Deserialize, Serialize};

/// Which part of the diagram a position belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    Base,
    Positive,
    Negative,
    Special,
}

impl Track {
    /// Positions on this track, in table order.
    pub fn positions(self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|p| p.track() == self)
            .collect()
    }
}

/// A single position of the Pinnacle diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    W,
    X,
    Y,
    Z,
}

impl Position {
    /// Every position, in table order.
    pub const ALL: [Position; 24] = [
        Position::A,
        Position::B,
        Position::C,
        Position::D,
        Position::E,
        Position::F,
        Position::G,
        Position::H,
        Position::I,
        Position::J,
        Position::K,
        Position::L,
        Position::M,
        Position::N,
        Position::O,
        Position::P,
        Position::Q,
        Position::R,
        Position::S,
        Position::T,
        Position::W,
        Position::X,
        Position::Y,
        Position::Z,
    ];

    /// The nine positions of the negative track, K through S.
    pub const NEGATIVE: [Position; 9] = [
        Position::K,
        Position::L,
        Position::M,
        Position::N,
        Position::O,
        Position::P,
        Position::Q,
        Position::R,
        Position::S,
    ];

    /// A through S: the nineteen positions inspected for absent digits.
    pub const A_TO_S: [Position; 19] = [
        Position::A,
        Position::B,
        Position::C,
        Position::D,
        Position::E,
        Position::F,
        Position::G,
        Position::H,
        Position::I,
        Position::J,
        Position::K,
        Position::L,
        Position::M,
        Position::N,
        Position::O,
        Position::P,
        Position::Q,
        Position::R,
        Position::S,
    ];

    /// The single uppercase letter naming this position.
    pub fn letter(self) -> char {
        match self {
            Position::A => 'A',
            Position::B => 'B',
            Position::C => 'C',
            Position::D => 'D',
            Position::E => 'E',
            Position::F => 'F',
            Position::G => 'G',
            Position::H => 'H',
            Position::I => 'I',
            Position::J => 'J',
            Position::K => 'K',
            Position::L => 'L',
            Position::M => 'M',
            Position::N => 'N',
            Position::O => 'O',
            Position::P => 'P',
            Position::Q => 'Q',
            Position::R => 'R',
            Position::S => 'S',
            Position::T => 'T',
            Position::W => 'W',
            Position::X => 'X',
            Position::Y => 'Y',
            Position::Z => 'Z',
        }
    }

    /// The label shown next to the number in the diagram and text panels.
    pub fn title(self) -> &'static str {
        match self {
            Position::A => "Tarea no aprendida",
            Position::B => "Mi esencia",
            Position::C => "Mi vida pasada",
            Position::D => "Mi máscara",
            Position::E => "Implantación del programa",
            Position::F => "Encuentro con tu maestro",
            Position::G => "Re-identificación con tu yo",
            Position::H => "Tu destino",
            Position::I => "Inconsciente",
            Position::J => "Mi espejo",
            Position::K => "Adolescencia",
            Position::L => "Juventud",
            Position::M => "Adultez",
            Position::N => "Adulto mayor",
            Position::O => "Inconsciente negativo",
            Position::P => "Mi sombra",
            Position::Q => "Ser inferior 1",
            Position::R => "Ser inferior 2",
            Position::S => "Ser inferior 3",
            Position::T => "Ausentes",
            Position::W => "Triplicidad",
            Position::X => "Reacción",
            Position::Y => "Misión",
            Position::Z => "Regalo divino",
        }
    }

    /// The report panel a position is shown in. D is computed from raw
    /// inputs like A..C but is read as the first positive number.
    pub fn track(self) -> Track {
        match self {
            Position::A | Position::B | Position::C => Track::Base,
            Position::K
            | Position::L
            | Position::M
            | Position::N
            | Position::O
            | Position::P
            | Position::Q
            | Position::R
            | Position::S => Track::Negative,
            Position::W | Position::T => Track::Special,
            _ => Track::Positive,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
