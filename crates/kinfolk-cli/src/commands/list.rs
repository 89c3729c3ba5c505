//! List command implementation.

use crate::cli::ListArgs;
use crate::error::Result;
use crate::input::{load_assertions, load_profiles, viewer_id};
use crate::output::Formatter;
use kinfolk_tree::{viewer_relation_labels, RelationLabel};

/// Execute the list command.
pub fn execute_list(args: ListArgs, formatter: &Formatter) -> Result<()> {
    let labels = collect_labels(&args)?;
    println!("{}", formatter.format_labels(&labels)?);
    Ok(())
}

/// Viewer-relative labels for every relation in the input file.
pub fn collect_labels(args: &ListArgs) -> Result<Vec<RelationLabel>> {
    let viewer = viewer_id(&args.input.viewer)?;
    let mut assertions = load_assertions(&args.input.assertions)?;
    let profiles = load_profiles(args.input.profiles.as_ref())?;

    if args.accepted_only {
        assertions.retain(|a| a.is_accepted());
    }

    Ok(viewer_relation_labels(&assertions, &viewer, &profiles))
}
