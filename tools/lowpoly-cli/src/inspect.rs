//! Inspect command - mesh statistics without exporting

use anyhow::Result;
use clap::Args;
use lowpoly_core::MeshStats;

use crate::generate::ModelArgs;
use crate::job;

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub params: ModelArgs,
}

/// Execute the inspect command
pub fn execute(args: InspectArgs) -> Result<()> {
    let config = args.params.generator_config()?;
    let request = args.params.request();
    let mesh = job::generate_mesh(&request, args.params.strictness(), &config)?;
    print!("{}", report(request.model.label(), &mesh.stats()));
    Ok(())
}

fn report(label: &str, stats: &MeshStats) -> String {
    let mut out = format!(
        "{label}\n  Polygons: {}\n  Vertices: {}\n",
        stats.face_count, stats.vertex_count
    );
    if let Some(bounds) = stats.bounds {
        let [x, y, z] = bounds.extent().to_array();
        out.push_str(&format!(
            "  Bounds:   {:.3} .. {:.3}\n  Extent:   {x:.3} x {y:.3} x {z:.3}\n",
            bounds.min, bounds.max
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lowpoly_core::{generate, ModelType};

    #[test]
    fn test_report_counts() {
        let mesh = generate(ModelType::Vehicle, 1.0, 0.5, Some(0)).unwrap();
        let text = report("Vehicle", &mesh.stats());
        assert!(text.starts_with("Vehicle\n"));
        assert!(text.contains("Polygons: 140\n"));
        assert!(text.contains("Vertices: 80\n"));
        assert!(text.contains("Extent:"));
    }
}
