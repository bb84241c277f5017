//! Tag IDs of `.bdo` tokens.

/// How a tag is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Single string stored in the result metadata under this key.
    Metadata(&'static str),
    /// Echo of an engine setting; only logged.
    Debug(&'static str),
    /// Three bin counts.
    Dimensions,
    /// Scored values.
    Data,
}

/// Bin counts along x, y and z.
pub const DIMENSIONS: u64 = 0xDD01;
/// Main data block.
pub const DATA: u64 = 0xDDBB;

const TAGS: &[(u64, TagKind)] = &[
    (0x00, TagKind::Metadata("shieldVersionName")),
    (0x01, TagKind::Metadata("shieldBinaryBuildDate")),
    (0x02, TagKind::Metadata("endSimulationDate")),
    (0x03, TagKind::Metadata("username")),
    (0x04, TagKind::Metadata("hostname")),
    // configuration
    (0xCC00, TagKind::Debug("tagdele")),
    (0xCC01, TagKind::Debug("tagdemin")),
    (0xCC02, TagKind::Debug("tagitypst")),
    (0xCC03, TagKind::Debug("tagitypms")),
    (0xCC04, TagKind::Debug("tagoln")),
    (0xCC05, TagKind::Debug("taginucre")),
    (0xCC06, TagKind::Debug("tagiemtrans")),
    (0xCC07, TagKind::Debug("tagiextspec")),
    (0xCC08, TagKind::Debug("tagintrfast")),
    (0xCC09, TagKind::Debug("tagintrslow")),
    (0xCC0A, TagKind::Debug("tagapzlscl")),
    (0xCC0B, TagKind::Debug("tagioffset")),
    (0xCC0C, TagKind::Debug("tagirifimc")),
    (0xCC0D, TagKind::Debug("tagirifitrans")),
    (0xCC0E, TagKind::Debug("tagirifizone")),
    (0xCC0F, TagKind::Debug("tagextnproj")),
    (0xCC10, TagKind::Debug("tagextptvdose")),
    (0xCC11, TagKind::Debug("tagixfirs")),
    // CT
    (0xCE00, TagKind::Debug("tagctang")),
    (0xCE01, TagKind::Debug("tagcticnt")),
    (0xCE02, TagKind::Debug("tagctlen")),
    // estimator
    (0xEE00, TagKind::Debug("tagestgeotyp")),
    (0xEE01, TagKind::Debug("tagestpages")),
    // detector page
    (0xDD00, TagKind::Debug("tagdetgeotyp")),
    (DIMENSIONS, TagKind::Dimensions),
    (0xDD02, TagKind::Debug("tagdetpart")),
    (0xDD03, TagKind::Debug("tagdetdtype")),
    (0xDD04, TagKind::Debug("tagdetpartz")),
    (0xDD05, TagKind::Debug("tagdetparta")),
    (0xDD06, TagKind::Debug("tagdetdmat")),
    (0xDD07, TagKind::Debug("tagdetnbine")),
    (0xDD08, TagKind::Debug("tagdetdifftype")),
    (0xDD09, TagKind::Debug("tagdetzonestart")),
    (0xDD0A, TagKind::Debug("tagdetdsize")),
    (0xDD0B, TagKind::Debug("tagdetdsizexyz")),
    (0xDD0C, TagKind::Debug("tagdetxyzstart")),
    (0xDD0D, TagKind::Debug("tagdetxyzstop")),
    (0xDD0E, TagKind::Debug("tagdetdifstart")),
    (0xDD0F, TagKind::Debug("tagdetdifstop")),
    (0xDD10, TagKind::Debug("tagdetvoxvol")),
    (DATA, TagKind::Data),
    // runtime
    (0xAA00, TagKind::Debug("tagrtnstat")),
    (0xAA01, TagKind::Debug("tagrttime")),
];

/// Handler for `tag`, if the tag is known.
pub fn tag_kind(tag: u64) -> Option<TagKind> {
    TAGS.iter().find(|(id, _)| *id == tag).map(|(_, kind)| *kind)
}
