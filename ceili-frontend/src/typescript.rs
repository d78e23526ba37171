use chrono::{DateTime, Utc};
use serde::Serialize;

use ceili_normalize::GeneratedCatalogue;

use crate::{CategoryGroups, FrontendError, ModuleWriter, format_timestamp};

/// Shapes of the exported records, kept in step with `OutputDance` and
/// `StepRecord` in `ceili-normalize`.
const TYPE_DECLARATIONS: &str = "\
export interface StepRecord {
  id: string;
  name: { english: string; irish: string };
  description: string;
  counts: number;
  footwork: string;
  handholds: string;
  tips: string[];
  commonMistakes: string[];
}

export interface OutputDanceRecord {
  id: string;
  name: { english: string; irish: string };
  difficulty: 'beginner' | 'intermediate' | 'advanced';
  duration: number;
  participants: number;
  formation: string;
  music: { title: string; tempo: string; timeSignature: string };
  steps: StepRecord[];
  culturalContext: string;
  region: string;
}
";

/// TypeScript data module imported directly by the web front-end.
pub struct TypeScriptModule;

impl TypeScriptModule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TypeScriptModule {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleWriter for TypeScriptModule {
    fn name(&self) -> &'static str {
        "TypeScript"
    }

    fn extension(&self) -> &'static str {
        "ts"
    }

    fn render(
        &self,
        catalogue: &GeneratedCatalogue,
        generated_at: DateTime<Utc>,
    ) -> Result<String, FrontendError> {
        let mut ts = String::new();
        ts.push_str("// Generated by ceili-gen from the ceili dance catalogue. Do not edit.\n");
        ts.push_str(&format!(
            "// Generated at: {}\n",
            format_timestamp(generated_at)
        ));
        ts.push_str(&format!(
            "// {} dances, {} steps\n\n",
            catalogue.stats.total_dances, catalogue.stats.total_steps
        ));

        ts.push_str(TYPE_DECLARATIONS);
        ts.push('\n');

        write_const(
            &mut ts,
            "ceiliDances",
            Some("OutputDanceRecord[]"),
            &catalogue.dances,
        )?;
        write_const(
            &mut ts,
            "danceCategories",
            Some("Record<string, Record<string, string[]>>"),
            &CategoryGroups::of(catalogue),
        )?;
        write_const(
            &mut ts,
            "historicalTimeline",
            None,
            &catalogue.indices.timeline,
        )?;
        write_const(
            &mut ts,
            "regionSummary",
            Some("Record<string, number>"),
            &catalogue.indices.region_counts,
        )?;
        write_const(&mut ts, "danceStatistics", None, &catalogue.stats)?;

        Ok(ts)
    }
}

/// Append `export const <name>[: <ty>] = <json>;`.
///
/// JSON is a subset of TypeScript expression syntax, so serde_json output
/// can be embedded as-is.
fn write_const<T: Serialize + ?Sized>(
    ts: &mut String,
    name: &str,
    ty: Option<&str>,
    value: &T,
) -> Result<(), FrontendError> {
    let json = serde_json::to_string_pretty(value)?;
    ts.push_str("export const ");
    ts.push_str(name);
    if let Some(ty) = ty {
        ts.push_str(": ");
        ts.push_str(ty);
    }
    ts.push_str(" = ");
    ts.push_str(&json);
    ts.push_str(";\n\n");
    Ok(())
}

#[cfg(test)]
#[path = "tests/typescript_tests.rs"]
mod tests;
