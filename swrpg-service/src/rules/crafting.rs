//! Crafting wizard.
//!
//! The wizard walks the GM through select template, acquire materials and
//! construct for one [`CraftingMode`] at a time. Droids add directive
//! programming, vehicles build three parts and then assemble them (see
//! [`assembly`]). Progress is kept in the game's [`GameSession`].

use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::debug;

use crate::buttons::{TRADE_LOCATION, button, crafting_main, row};
use crate::chat::{ChatMessageRecord, NONE_PLACEHOLDER, Reply};
use crate::commands::CommandName;
use crate::commands::args::Args;
use crate::dice::{Symbol, difficulty_to_dice};
use crate::error::CommandResult;
use crate::formula::{purchase_price, trade_difficulty};
use crate::service::state::GameSession;
use crate::tables::{self, Stats, TemplateCategory, TemplateRecord};

use super::credits;

pub mod assembly;

const SPEAKER: &str = "Crafting Droid";

/// Source shown for records with house statistics
pub(crate) const HOMEBREW: &str = "Homebrew";

/// Kinds of item the wizard can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum CraftingMode {
    Armor,
    Droid,
    Gadget,
    Lightsaber,
    Vehicle,
    Weapon,
    Cybernetic,
}

impl CraftingMode {
    /// Tables searched for this mode's template ids
    pub fn categories(self) -> &'static [TemplateCategory] {
        match self {
            CraftingMode::Armor => &[TemplateCategory::Armor],
            CraftingMode::Droid => &[
                TemplateCategory::DroidChassis,
                TemplateCategory::DroidDirective,
            ],
            CraftingMode::Gadget => &[TemplateCategory::Gadget],
            CraftingMode::Lightsaber => &[TemplateCategory::LightsaberHilt],
            CraftingMode::Vehicle => &[
                TemplateCategory::VehicleFrame,
                TemplateCategory::VehicleEngine,
                TemplateCategory::VehicleHull,
            ],
            CraftingMode::Weapon => &[TemplateCategory::Weapon],
            CraftingMode::Cybernetic => &[TemplateCategory::Cybernetic],
        }
    }

    pub fn lookup(self, id: u32) -> Option<&'static TemplateRecord> {
        self.categories()
            .iter()
            .find_map(|category| tables::lookup(*category, id))
    }

    pub fn label(self) -> &'static str {
        match self {
            CraftingMode::Armor => "Armor",
            CraftingMode::Droid => "Droid",
            CraftingMode::Gadget => "Gadget",
            CraftingMode::Lightsaber => "Lightsaber",
            CraftingMode::Vehicle => "Vehicle",
            CraftingMode::Weapon => "Weapon",
            CraftingMode::Cybernetic => "Cybernetic",
        }
    }

    pub fn speaker(self) -> &'static str {
        match self {
            CraftingMode::Armor => "Armorsmith Droid",
            CraftingMode::Droid => "Droid Mechanic",
            CraftingMode::Gadget => "Engineering Droid",
            CraftingMode::Lightsaber => "The Living Force",
            CraftingMode::Vehicle => "Mechanics Droid",
            CraftingMode::Weapon => "Weaponsmith Droid",
            CraftingMode::Cybernetic => "Cybernetics Droid",
        }
    }
}

/// How one table is presented by the wizard
struct CategoryInfo {
    /// Title of the construction card
    title: &'static str,
    /// Host macro prompting for a template id of this table
    template_macro: &'static str,
    /// Noun used on step buttons
    noun: &'static str,
}

fn info(category: TemplateCategory) -> CategoryInfo {
    let (title, template_macro, noun) = match category {
        TemplateCategory::Weapon => ("Weapon Construction", "#CraftWeaponTemplate", "Weapon"),
        TemplateCategory::Armor => ("Armor Construction", "#CraftArmorTemplate", "Armor"),
        TemplateCategory::Gadget => ("Gadget Construction", "#CraftGadgetTemplate", "Gadget"),
        TemplateCategory::DroidChassis => (
            "Droid Chassis Construction",
            "#CraftDroidTemplate",
            "Chassis",
        ),
        TemplateCategory::DroidDirective => (
            "Droid Directive Programming",
            "#CraftDirectiveTemplate",
            "Directive",
        ),
        TemplateCategory::VehicleFrame => (
            "Vehicle Frame Construction",
            "#CraftFrameTemplate",
            "Frame",
        ),
        TemplateCategory::VehicleEngine => (
            "Vehicle Engine Construction",
            "#CraftEngineTemplate",
            "Engine",
        ),
        TemplateCategory::VehicleHull => (
            "Vehicle Hull Construction",
            "#CraftHullTemplate",
            "Hull",
        ),
        TemplateCategory::LightsaberHilt => (
            "Lightsaber Construction",
            "#CraftLightsaberTemplate",
            "Lightsaber",
        ),
        TemplateCategory::Cybernetic => (
            "Cybernetic Construction",
            "#CraftCyberneticTemplate",
            "Cybernetic",
        ),
    };
    CategoryInfo {
        title,
        template_macro,
        noun,
    }
}

// ==================== Menus ====================

/// `craft-ui`: main crafting menu; clears the wizard
pub fn main(session: &mut GameSession) -> Vec<Reply> {
    session.reset_crafting();
    vec![main_menu()]
}

fn main_menu() -> Reply {
    let mode_button = |mode: CraftingMode| {
        button(mode.label(), CommandName::CraftMode, &[mode.to_string().as_str()])
    };
    let mut record = ChatMessageRecord::new().with("title", "Crafting Station");
    let modes: Vec<CraftingMode> = CraftingMode::iter().collect();
    for (key, pair) in ["wide", "wide2", "wide3", "wide4"].iter().zip(modes.chunks(2)) {
        let buttons: Vec<String> = pair.iter().copied().map(mode_button).collect();
        record.insert(*key, row(&buttons));
    }
    Reply::private(SPEAKER, record)
}

/// Step text that links to a command once its record is known
fn step(label: &str, command: CommandName, args: Option<Vec<String>>) -> String {
    match args {
        Some(args) => {
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            button(label, command, &args)
        }
        None => label.to_string(),
    }
}

fn acquire_step(label: &str, record: Option<&TemplateRecord>) -> String {
    step(
        label,
        CommandName::CraftAcquire,
        record.map(|r| {
            vec![
                r.rarity.to_string(),
                r.price.to_string(),
                TRADE_LOCATION.to_string(),
            ]
        }),
    )
}

fn construct_step(noun: &str, record: Option<&TemplateRecord>) -> String {
    step(
        &format!("Construct {}", noun),
        CommandName::CraftConstruct,
        record.map(|r| vec![r.id.to_string()]),
    )
}

fn select_step(label: &str, category: TemplateCategory) -> String {
    button(
        label,
        CommandName::CraftTemplate,
        &[info(category).template_macro],
    )
}

fn selected_name(record: Option<&TemplateRecord>) -> &'static str {
    record.map(|r| r.name).unwrap_or(NONE_PLACEHOLDER)
}

/// Wizard prompt for the session's current mode
pub fn prompt(session: &GameSession, mode: CraftingMode) -> Reply {
    let selected = session.selection.and_then(|id| mode.lookup(id));
    let record = match mode {
        CraftingMode::Droid => droid_prompt(selected),
        CraftingMode::Vehicle => vehicle_prompt(session, selected),
        _ => {
            let category = mode.categories()[0];
            ChatMessageRecord::new()
                .with("title", format!("{} Construction", mode.label()))
                .with("flavor", format!("Current Template: {}", selected_name(selected)))
                .with("wide", format!("Step 1: {}", select_step("Select a Template", category)))
                .with("wide2", format!("Step 2: {}", acquire_step("Acquire Materials", selected)))
                .with("wide3", format!("Step 3: {}", construct_step(mode.label(), selected)))
                .with("Back to", crafting_main())
        }
    };
    Reply::private(mode.speaker(), record)
}

fn droid_prompt(selected: Option<&TemplateRecord>) -> ChatMessageRecord {
    let chassis = selected.filter(|r| r.category() == TemplateCategory::DroidChassis);
    ChatMessageRecord::new()
        .with("title", "Droid Construction")
        .with(
            "flavor",
            format!("Current Chassis/Directive: {}", selected_name(selected)),
        )
        .with(
            "wide",
            format!("Step 1: {}", select_step("Select a Chassis", TemplateCategory::DroidChassis)),
        )
        .with("wide2", format!("Step 2: {}", acquire_step("Acquire Materials", chassis)))
        .with("wide3", format!("Step 3: {}", construct_step("Chassis", chassis)))
        .with(
            "wide4",
            format!(
                "Step 4: {}",
                button(
                    "Program Directives",
                    CommandName::CraftDirective,
                    &[info(TemplateCategory::DroidDirective).template_macro],
                )
            ),
        )
        .with("Back to", crafting_main())
}

fn vehicle_prompt(session: &GameSession, selected: Option<&TemplateRecord>) -> ChatMessageRecord {
    let build = session.vehicle;
    let parts = [
        (TemplateCategory::VehicleFrame, build.frame),
        (TemplateCategory::VehicleEngine, build.engine),
        (TemplateCategory::VehicleHull, build.hull),
    ];

    let mut record = ChatMessageRecord::new()
        .with("title", "Vehicle Construction")
        .with("flavor", format!("Current Template: {}", selected_name(selected)));

    let mut number = 1;
    for (category, id) in parts {
        let noun = info(category).noun;
        let part = id.and_then(|id| tables::lookup(category, id));
        let article = if noun == "Engine" { "an" } else { "a" };
        let select = select_step(&format!("Select {} {}", article, noun), category);
        let acquire = acquire_step(&format!("Acquire {} Materials", noun), part);
        for text in [select, acquire, construct_step(noun, part)] {
            record.insert(format!("Step {}", number), text);
            number += 1;
        }
    }

    let assemble = step(
        "Assemble Vehicle",
        CommandName::CraftAssemble,
        match (build.frame, build.engine, build.hull) {
            (Some(frame), Some(engine), Some(hull)) => Some(vec![
                frame.to_string(),
                engine.to_string(),
                hull.to_string(),
            ]),
            _ => None,
        },
    );
    record.insert(format!("Step {}", number), assemble);
    record.insert("Back to", crafting_main());
    record
}

// ==================== Commands ====================

/// `craft-mode mode`: unknown modes fall back to the main menu
pub fn mode(session: &mut GameSession, args: &Args) -> Vec<Reply> {
    match args.word(0).and_then(|m| m.parse::<CraftingMode>().ok()) {
        Some(mode) => {
            session.select_mode(mode);
            vec![prompt(session, mode)]
        }
        None => {
            debug!(mode = ?args.word(0), "Unknown crafting mode");
            main(session)
        }
    }
}

/// `craft-template id`
pub fn template(session: &mut GameSession, args: &Args) -> CommandResult<Vec<Reply>> {
    let id = args.id(0, "template")?;
    let Some(mode) = session.mode else {
        return Ok(main(session));
    };
    session.select_template(id, mode.lookup(id));
    Ok(vec![prompt(session, mode)])
}

/// `craft-acquire rarity basePrice region proximity population`
pub fn acquire(args: &Args) -> CommandResult<Vec<Reply>> {
    let rarity = args.int(0, "rarity")?;
    let base_price = args.number(1, "base price")?;
    let region = args.coded(2, "region")?;
    let proximity = args.coded(3, "proximity")?;
    let population = args.coded(4, "population")?;

    let difficulty = trade_difficulty(rarity, region, proximity, population);
    let record = ChatMessageRecord::new()
        .with("title", "Acquiring Materials")
        .with("Difficulty", difficulty_to_dice(difficulty))
        .with(
            "Purchase Price",
            credits(purchase_price(difficulty, base_price)),
        );
    Ok(vec![Reply::private(SPEAKER, record)])
}

/// `craft-construct [id]`: an explicit id overrides the selection
pub fn construct(session: &mut GameSession, args: &Args) -> CommandResult<Vec<Reply>> {
    let explicit = args.optional_id(0, "template")?;
    let (Some(mode), Some(id)) = (session.mode, explicit.or(session.selection)) else {
        return Ok(main(session));
    };
    match mode.lookup(id) {
        Some(record) => Ok(construct_replies(mode.speaker(), record)),
        None => {
            debug!(%mode, id, "Template not found");
            Ok(vec![prompt(session, mode)])
        }
    }
}

/// `craft-program id` / `craft-directive id`
pub fn program(session: &mut GameSession, args: &Args) -> CommandResult<Vec<Reply>> {
    let id = args.id(0, "directive")?;
    match tables::lookup(TemplateCategory::DroidDirective, id) {
        Some(record) => Ok(construct_replies(CraftingMode::Droid.speaker(), record)),
        None => {
            session.select_mode(CraftingMode::Droid);
            Ok(vec![prompt(session, CraftingMode::Droid)])
        }
    }
}

/// Crafting card, then the finished item's card, then any follow-up for the category
pub fn construct_replies(speaker: &str, record: &TemplateRecord) -> Vec<Reply> {
    let mut replies = vec![
        Reply::private(speaker, crafting_card(record)),
        Reply::private(speaker, item_card(record)),
    ];
    if record.category() == TemplateCategory::Cybernetic {
        replies.push(Reply::private(speaker, installation_card()));
    }
    replies
}

/// What it takes to build the record: check, time and materials
pub(crate) fn crafting_card(record: &TemplateRecord) -> ChatMessageRecord {
    let subtitle = match &record.stats {
        Stats::Droid(droid) => format!("{} ({})", record.name, droid.rank),
        _ => record.name.to_string(),
    };
    let mut card = ChatMessageRecord::new()
        .with("title", info(record.category()).title)
        .with("subtitle", subtitle)
        .with(
            "flavor",
            format!(
                "{} ({})",
                record.skills.join(", "),
                difficulty_to_dice(i64::from(record.difficulty))
            ),
        )
        .with(
            "prewide",
            format!(
                "Time Required: {}, -2 hours for each additional success",
                record.time
            ),
        );
    // Directives are software; there is nothing to buy
    if !matches!(record.stats, Stats::Directive(_)) {
        card.insert("Price", record.price);
        card.insert("Rarity", record.rarity);
    }
    if record.restricted {
        card.insert("Restricted", "Yes");
    }
    if record.is_homebrew() {
        card.insert("Source", HOMEBREW);
    }
    card
}

/// The finished item's stat block
fn item_card(record: &TemplateRecord) -> ChatMessageRecord {
    let mut card = ChatMessageRecord::new()
        .with("title", record.name)
        .with("subtitle", record.item_type());
    for (label, value) in record.profile() {
        card.insert(label, value);
    }
    if record.is_homebrew() {
        card.insert("Source", HOMEBREW);
    }
    card
}

fn installation_card() -> ChatMessageRecord {
    ChatMessageRecord::new()
        .with("title", "Cybernetic Installation")
        .with("flavor", format!("Medicine ({})", difficulty_to_dice(3)))
        .with("prewide", "Time Required: 6 hours")
        .with("wide", "Increase Difficulty twice if installing on self")
        .with(
            "wide2",
            format!("{}: Cybernetic is not installed, suffers minor damage", Symbol::Failure),
        )
        .with("wide3", format!("{}: Inflict 3 strain or 1 wound", Symbol::Threat))
        .with("wide4", format!("{}: Patient suffers Critical Injury", Symbol::Despair))
}
