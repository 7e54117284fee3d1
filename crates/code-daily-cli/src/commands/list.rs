//! Implementation of the `code-daily list` command.

use serde_json::{Value, json};

use code_daily_core::domain::{LanguageKey, LanguageProfile, catalog};

use crate::{
    cli::{ListArgs, ListFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let profiles = select_profiles(args.language.as_deref())?;

    match args.format {
        ListFormat::Table => {
            output.header("Available languages and sections:")?;
            for profile in &profiles {
                output.print("")?;
                output.print(&format!(
                    "  {} {}",
                    profile.display_name(),
                    output.dim(&format!("({})", profile.key.as_str()))
                ))?;
                for &section in profile.sections {
                    let note = if catalog::templates_for(profile.key, section).is_empty() {
                        format!("  {}", output.dim("(no starter files)"))
                    } else {
                        String::new()
                    };
                    output.print(&format!("    • {section}{note}"))?;
                }
            }
        }

        ListFormat::List => {
            for line in pair_lines(&profiles) {
                output.data(&line)?;
            }
        }

        // Bypasses styling so the payload stays parseable in pipes.
        ListFormat::Json => {
            output.data(&format!("{:#}", catalog_json(&profiles)))?;
        }
    }

    Ok(())
}

/// Every profile, or the one `--lang` names.
fn select_profiles(filter: Option<&str>) -> CliResult<Vec<&'static LanguageProfile>> {
    let Some(raw) = filter else {
        return Ok(catalog::languages().iter().collect());
    };

    let key: LanguageKey = raw.parse().map_err(|_| CliError::UnsupportedLanguage {
        language: raw.to_string(),
    })?;
    catalog::find_language(key)
        .map(|profile| vec![profile])
        .ok_or_else(|| CliError::UnsupportedLanguage {
            language: raw.to_string(),
        })
}

/// `language<TAB>section` per offered pair.
fn pair_lines(profiles: &[&LanguageProfile]) -> Vec<String> {
    profiles
        .iter()
        .flat_map(|profile| {
            profile
                .sections
                .iter()
                .map(move |section| format!("{}\t{}", profile.key.as_str(), section))
        })
        .collect()
}

fn catalog_json(profiles: &[&LanguageProfile]) -> Value {
    Value::Array(
        profiles
            .iter()
            .map(|profile| {
                let sections: Vec<Value> = profile
                    .sections
                    .iter()
                    .map(|&section| {
                        json!({
                            "name": section.display_name(),
                            "starter_files": catalog::templates_for(profile.key, section).len(),
                        })
                    })
                    .collect();
                json!({
                    "key": profile.key.as_str(),
                    "name": profile.display_name(),
                    "sections": sections,
                })
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filter_lists_every_language() {
        let profiles = select_profiles(None).unwrap();
        assert_eq!(profiles.len(), catalog::languages().len());
    }

    #[test]
    fn filter_accepts_aliases() {
        let profiles = select_profiles(Some("ts")).unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].key, LanguageKey::TypeScript);
    }

    #[test]
    fn unknown_filter_is_unsupported_language() {
        assert!(matches!(
            select_profiles(Some("cobol")),
            Err(CliError::UnsupportedLanguage { ref language }) if language == "cobol"
        ));
    }

    #[test]
    fn pair_lines_cover_every_section() {
        let profiles = select_profiles(Some("rust")).unwrap();
        let lines = pair_lines(&profiles);
        assert_eq!(lines.len(), profiles[0].sections.len());
        assert!(lines.iter().all(|l| l.starts_with("rust\t")));
    }

    #[test]
    fn json_reports_starter_file_counts() {
        let profiles = select_profiles(Some("python")).unwrap();
        let value = catalog_json(&profiles);
        let sections = value[0]["sections"].as_array().unwrap();

        let data_science = sections
            .iter()
            .find(|s| s["name"] == "Data Science")
            .unwrap();
        assert_eq!(data_science["starter_files"], 0);
        assert_eq!(value[0]["key"], "python");
    }
}
