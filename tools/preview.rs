/// Preview — renders entity files to the terminal for eyeballing output.
///
/// Usage: preview --catalog <path> --entities <path> [--locale <id>]
///                [--fallback <id>] [--table <path>] [--compressed]

use codex_engine::core::catalog::Catalog;
use codex_engine::core::locale::LocaleEnvironment;
use codex_engine::core::responsive::ResponsiveTextSize;
use codex_engine::render::blessed::{BlessingDeps, LiturgyDeps};
use codex_engine::render::combat::CombatTechniqueDeps;
use codex_engine::render::rules::FocusRuleDeps;
use codex_engine::render::skill::SkillDeps;
use codex_engine::render::spellwork::{CantripDeps, SpellworkDeps};
use codex_engine::render::{
    render_blessing, render_cantrip, render_ceremony, render_close_combat_technique,
    render_experience_level, render_focus_rule, render_liturgical_chant, render_optional_rule,
    render_ranged_combat_technique, render_ritual, render_skill, render_spell,
};
use codex_engine::schema::entities::{
    Blessing, Cantrip, Ceremony, CombatTechnique, ExperienceLevel, FocusRule, LiturgicalChant,
    OptionalRule, Ritual, Skill, Spell,
};
use serde::Deserialize;
use std::path::Path;

/// One entry of a preview entity file, tagged by kind.
#[derive(Debug, Deserialize)]
enum EntityRecord {
    Spell(Spell),
    Ritual(Ritual),
    Cantrip(Cantrip),
    LiturgicalChant(LiturgicalChant),
    Ceremony(Ceremony),
    Blessing(Blessing),
    Skill(Skill),
    CloseCombatTechnique(CombatTechnique),
    RangedCombatTechnique(CombatTechnique),
    ExperienceLevel(ExperienceLevel),
    FocusRule(FocusRule),
    OptionalRule(OptionalRule),
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut catalog_path = None;
    let mut entities_path = None;
    let mut locale_id = "en-US".to_string();
    let mut fallback_id = None;
    let mut table_path = None;
    let mut size = ResponsiveTextSize::Full;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--catalog" if i + 1 < args.len() => {
                i += 1;
                catalog_path = Some(args[i].clone());
            }
            "--entities" if i + 1 < args.len() => {
                i += 1;
                entities_path = Some(args[i].clone());
            }
            "--locale" if i + 1 < args.len() => {
                i += 1;
                locale_id = args[i].clone();
            }
            "--fallback" if i + 1 < args.len() => {
                i += 1;
                fallback_id = Some(args[i].clone());
            }
            "--table" if i + 1 < args.len() => {
                i += 1;
                table_path = Some(args[i].clone());
            }
            "--compressed" => {
                size = ResponsiveTextSize::Compressed;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let catalog = match catalog_path {
        Some(ref path) => match Catalog::load_from_ron(Path::new(path)) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("ERROR loading catalog {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => {
            eprintln!("Missing --catalog");
            print_usage();
            std::process::exit(1);
        }
    };

    let entities: Vec<EntityRecord> = match entities_path {
        Some(ref path) => {
            let contents = match std::fs::read_to_string(path) {
                Ok(contents) => contents,
                Err(e) => {
                    eprintln!("ERROR reading entities {}: {}", path, e);
                    std::process::exit(1);
                }
            };
            match ron::from_str(&contents) {
                Ok(entities) => entities,
                Err(e) => {
                    eprintln!("ERROR parsing entities {}: {}", path, e);
                    std::process::exit(1);
                }
            }
        }
        None => {
            eprintln!("Missing --entities");
            print_usage();
            std::process::exit(1);
        }
    };

    let mut locale = LocaleEnvironment::new(locale_id.as_str());
    if let Some(fallback) = fallback_id {
        locale = locale.with_fallback(fallback.as_str());
    }
    if let Some(ref path) = table_path {
        match LocaleEnvironment::load_table_from_ron(Path::new(path)) {
            Ok(table) => locale = locale.with_table(table),
            Err(e) => {
                eprintln!("ERROR loading table {}: {}", path, e);
                std::process::exit(1);
            }
        }
    }

    println!("Loaded {} entities, locale {}", entities.len(), locale_id);
    println!();

    for entity in &entities {
        let rendered = match entity {
            EntityRecord::Spell(entry) => {
                render_spell(entry, &SpellworkDeps::from_catalog(&catalog), &locale, size)
            }
            EntityRecord::Ritual(entry) => {
                render_ritual(entry, &SpellworkDeps::from_catalog(&catalog), &locale, size)
            }
            EntityRecord::Cantrip(entry) => {
                render_cantrip(entry, &CantripDeps::from_catalog(&catalog), &locale, size)
            }
            EntityRecord::LiturgicalChant(entry) => render_liturgical_chant(
                entry,
                &LiturgyDeps::from_catalog(&catalog),
                &locale,
                size,
            ),
            EntityRecord::Ceremony(entry) => {
                render_ceremony(entry, &LiturgyDeps::from_catalog(&catalog), &locale, size)
            }
            EntityRecord::Blessing(entry) => {
                render_blessing(entry, &BlessingDeps::from_catalog(&catalog), &locale, size)
            }
            EntityRecord::Skill(entry) => {
                render_skill(entry, &SkillDeps::from_catalog(&catalog, &[], &[]), &locale)
            }
            EntityRecord::CloseCombatTechnique(entry) => render_close_combat_technique(
                entry,
                &CombatTechniqueDeps::from_catalog(&catalog),
                &locale,
            ),
            EntityRecord::RangedCombatTechnique(entry) => render_ranged_combat_technique(
                entry,
                &CombatTechniqueDeps::from_catalog(&catalog),
                &locale,
            ),
            EntityRecord::ExperienceLevel(entry) => render_experience_level(entry, &locale),
            EntityRecord::FocusRule(entry) => {
                render_focus_rule(entry, &FocusRuleDeps::from_catalog(&catalog), &locale)
            }
            EntityRecord::OptionalRule(entry) => {
                render_optional_rule(entry, &catalog.publications, &locale)
            }
        };

        match rendered {
            Some(entry) => print_entry(&entry),
            None => println!("(no translation for {})\n", locale_id),
        }
    }
}

fn print_entry(entry: &codex_engine::core::entry::LibraryEntry) {
    println!("=== {} [{}] ===", entry.title, entry.class_name);
    if let Some(ref subtitle) = entry.subtitle {
        println!("    {}", subtitle);
    }
    for block in &entry.content {
        match &block.label {
            Some(label) => println!("{}: {}", label, block.value),
            None => println!("{}", block.value),
        }
    }
    if let Some(ref references) = entry.references {
        println!("-- {}", references);
    }
    println!();
}

fn print_usage() {
    println!("Preview — renders entity files to the terminal for eyeballing output.");
    println!();
    println!("Usage: preview --catalog <path> --entities <path> [--locale <id>]");
    println!("               [--fallback <id>] [--table <path>] [--compressed]");
    println!();
    println!("  --catalog <path>   Path to a RON catalog of static data");
    println!("  --entities <path>  Path to a RON list of tagged entities");
    println!("  --locale <id>      Locale to render (default: en-US)");
    println!("  --fallback <id>    Fallback locale for entity translations");
    println!("  --table <path>     Path to a RON template translation table");
    println!("  --compressed       Render the compressed text variants");
}
