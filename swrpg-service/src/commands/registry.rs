//! Command name registry.
//!
//! Every chat command is a variant of [`CommandName`]. The chat spelling is
//! derived from the variant via strum (`CraftTemplate` is `craft-template`),
//! so buttons and the router can never disagree about a name.

use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// All chat commands as an exhaustive enum.
///
/// Adding a command requires:
/// 1. Add variant here
/// 2. Add its handler to `commands::dispatch` (compile error if missing due to exhaustive match)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter, IntoStaticStr, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum CommandName {
    // ==========================================
    // Economy
    // ==========================================
    Trade,
    Repair,
    Contact,

    // ==========================================
    // Crafting
    // ==========================================
    CraftUi,
    CraftMode,
    CraftTemplate,
    CraftAcquire,
    CraftConstruct,
    CraftProgram,
    CraftDirective,
    CraftAssemble,

    // ==========================================
    // Slicing encounters
    // ==========================================
    SliceUi,
    SliceAccess,
    SliceActivate,
    SliceBackdoor,
    SliceDisable,
    SliceEnact,
    SliceExpel,
    SliceLockdown,
    SliceRestart,
    SliceTrace,
    SliceSecurityInc,
    SliceSecurityDec,
    SliceSecurityReset,

    // ==========================================
    // Social encounters
    // ==========================================
    SocialUi,
    SocialCharm,
    SocialCoercion,
    SocialDeception,
    SocialLeadership,
    SocialNegotiation,

    // ==========================================
    // Navigation
    // ==========================================
    NavUi,
    NavChase,
    NavDifficulty,

    // ==========================================
    // Recovery
    // ==========================================
    RecoverUi,
    RecoverWound,
    RecoverStrain,
    RecoverInjury,
    RecoverHull,
    RecoverSystem,
    RecoverHit,

    // ==========================================
    // GM menu
    // ==========================================
    Ui,
}

impl CommandName {
    /// Name as a static string, for metric labels
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_kebab_case_names() {
        assert_eq!(CommandName::CraftTemplate.to_string(), "craft-template");
        assert_eq!(CommandName::SliceSecurityInc.to_string(), "slice-security-inc");
        assert_eq!(CommandName::Ui.as_str(), "ui");
        assert_eq!(
            CommandName::from_str("recover-hull").unwrap(),
            CommandName::RecoverHull
        );
        assert!(CommandName::from_str("craft-gadget").is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for name in CommandName::iter() {
            assert_eq!(CommandName::from_str(name.as_str()).unwrap(), name);
        }
    }
}
