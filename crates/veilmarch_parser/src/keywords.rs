//! The keyword registry.
//!
//! A fixed, ordered table maps the first token of a line to an
//! [`OrderKind`]. Lookup is linear and case-insensitive, and treats `_`
//! and space as the same character, so `no_cross`, `NOCROSS`, and
//! `no cross` all resolve to the same kind.

use veilmarch_world::registry::normalize;

/// Every keyword the interpreter recognizes at the start of a line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum OrderKind {
    // Framing.
    AtlantisOpen,
    AtlantisClose,
    Unit,
    Form,
    End,
    EndForm,
    Turn,
    EndTurn,

    // Month-long family.
    Move,
    Advance,
    Sail,
    Build,
    Produce,
    Study,
    Teach,
    Work,
    Entertain,
    Idle,

    // Accumulating lists.
    Give,
    Take,
    Buy,
    Sell,
    Withdraw,
    Transport,
    Distribute,
    Exchange,
    Attack,
    Evict,
    Find,
    Forget,

    // Stealth, magic, misc single slots.
    Steal,
    Assassinate,
    Cast,
    Join,
    Promote,

    // Instant unit flags and modes.
    Guard,
    Avoid,
    Behind,
    Hold,
    Share,
    Autotax,
    Noaid,
    Nocross,
    Nospoils,
    Consume,
    Reveal,
    Spoils,
    Tax,
    Pillage,
    Enter,
    Leave,
    Destroy,
    Combat,
    Prepare,
    Armor,
    Weapon,
    Claim,

    // Faction-level instants.
    Name,
    Describe,
    Address,
    Password,
    Option,
    Declare,
    Faction,
    Quit,
    Restart,
    Show,
}

/// The keyword table. Order matters only for readability; every spelling
/// is unique after normalization.
const KEYWORDS: &[(&str, OrderKind)] = &[
    ("#atlantis", OrderKind::AtlantisOpen),
    ("#end", OrderKind::AtlantisClose),
    ("unit", OrderKind::Unit),
    ("form", OrderKind::Form),
    ("end", OrderKind::End),
    ("endform", OrderKind::EndForm),
    ("turn", OrderKind::Turn),
    ("endturn", OrderKind::EndTurn),
    ("move", OrderKind::Move),
    ("advance", OrderKind::Advance),
    ("sail", OrderKind::Sail),
    ("build", OrderKind::Build),
    ("produce", OrderKind::Produce),
    ("study", OrderKind::Study),
    ("teach", OrderKind::Teach),
    ("work", OrderKind::Work),
    ("entertain", OrderKind::Entertain),
    ("idle", OrderKind::Idle),
    ("give", OrderKind::Give),
    ("take", OrderKind::Take),
    ("buy", OrderKind::Buy),
    ("sell", OrderKind::Sell),
    ("withdraw", OrderKind::Withdraw),
    ("transport", OrderKind::Transport),
    ("distribute", OrderKind::Distribute),
    ("exchange", OrderKind::Exchange),
    ("attack", OrderKind::Attack),
    ("evict", OrderKind::Evict),
    ("find", OrderKind::Find),
    ("forget", OrderKind::Forget),
    ("steal", OrderKind::Steal),
    ("assassinate", OrderKind::Assassinate),
    ("cast", OrderKind::Cast),
    ("join", OrderKind::Join),
    ("promote", OrderKind::Promote),
    ("guard", OrderKind::Guard),
    ("avoid", OrderKind::Avoid),
    ("behind", OrderKind::Behind),
    ("hold", OrderKind::Hold),
    ("share", OrderKind::Share),
    ("autotax", OrderKind::Autotax),
    ("noaid", OrderKind::Noaid),
    ("nocross", OrderKind::Nocross),
    ("no cross", OrderKind::Nocross),
    ("nospoils", OrderKind::Nospoils),
    ("no spoils", OrderKind::Nospoils),
    ("consume", OrderKind::Consume),
    ("reveal", OrderKind::Reveal),
    ("spoils", OrderKind::Spoils),
    ("tax", OrderKind::Tax),
    ("pillage", OrderKind::Pillage),
    ("enter", OrderKind::Enter),
    ("leave", OrderKind::Leave),
    ("destroy", OrderKind::Destroy),
    ("combat", OrderKind::Combat),
    ("prepare", OrderKind::Prepare),
    ("armor", OrderKind::Armor),
    ("weapon", OrderKind::Weapon),
    ("claim", OrderKind::Claim),
    ("name", OrderKind::Name),
    ("describe", OrderKind::Describe),
    ("address", OrderKind::Address),
    ("password", OrderKind::Password),
    ("option", OrderKind::Option),
    ("declare", OrderKind::Declare),
    ("faction", OrderKind::Faction),
    ("quit", OrderKind::Quit),
    ("restart", OrderKind::Restart),
    ("show", OrderKind::Show),
];

/// Classifies a first token. Returns `None` for an unknown keyword;
/// callers report the per-line error.
#[must_use]
pub fn lookup(token: &str) -> Option<OrderKind> {
    let token = normalize(token);
    KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == token)
        .map(|&(_, kind)| kind)
}
