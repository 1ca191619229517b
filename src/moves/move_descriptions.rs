//! Move value type and its shape flags.
//!
//! A `Move` is generated against one specific position and carries everything
//! make/unmake and display code need: the mover, the captured kind, and a
//! small flag set describing special handling.

use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Bitset describing the shape of a move. Empty means a quiet move.
///
/// `CAPTURE` combines with `PROMOTION`, and is always set alongside
/// `EN_PASSANT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MoveFlags(u8);

impl MoveFlags {
    pub const NORMAL: MoveFlags = MoveFlags(0);
    pub const CAPTURE: MoveFlags = MoveFlags(1 << 0);
    pub const DOUBLE_PAWN_PUSH: MoveFlags = MoveFlags(1 << 1);
    pub const KING_CASTLE: MoveFlags = MoveFlags(1 << 2);
    pub const QUEEN_CASTLE: MoveFlags = MoveFlags(1 << 3);
    pub const EN_PASSANT: MoveFlags = MoveFlags(1 << 4);
    pub const PROMOTION: MoveFlags = MoveFlags(1 << 5);

    #[inline]
    pub const fn contains(self, other: MoveFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn union(self, other: MoveFlags) -> MoveFlags {
        MoveFlags(self.0 | other.0)
    }

    #[inline]
    pub const fn is_normal(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for MoveFlags {
    type Output = MoveFlags;

    fn bitor(self, rhs: MoveFlags) -> MoveFlags {
        self.union(rhs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub color: Color,
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
    pub flags: MoveFlags,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.flags.contains(MoveFlags::CAPTURE)
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.flags.contains(MoveFlags::KING_CASTLE) || self.flags.contains(MoveFlags::QUEEN_CASTLE)
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.flags.contains(MoveFlags::EN_PASSANT)
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.flags.contains(MoveFlags::PROMOTION)
    }
}

/// Builds a move, deriving `CAPTURE`/`PROMOTION` from the optional pieces so
/// callers only pass the flags that cannot be inferred.
#[inline]
pub fn build_move(
    color: Color,
    from: Square,
    to: Square,
    piece: PieceKind,
    captured: Option<PieceKind>,
    promotion: Option<PieceKind>,
    extra_flags: MoveFlags,
) -> Move {
    let mut flags = extra_flags;
    if captured.is_some() {
        flags = flags | MoveFlags::CAPTURE;
    }
    if promotion.is_some() {
        flags = flags | MoveFlags::PROMOTION;
    }

    Move {
        color,
        from,
        to,
        piece,
        captured,
        flags,
        promotion,
    }
}
