//! Tree command implementation.

use crate::cli::TreeArgs;
use crate::error::Result;
use crate::input::{load_assertions, load_profiles, viewer_id};
use crate::output::Formatter;
use kinfolk_tree::{FamilyTree, FamilyTreeBuilder, TreeConfig};

/// Execute the tree command.
pub fn execute_tree(args: TreeArgs, config: &TreeConfig, formatter: &Formatter) -> Result<()> {
    let tree = build_tree(&args, config)?;

    println!("{}", formatter.format_tree(&tree)?);

    if args.stats {
        let stats = formatter.format_stats(tree.stats())?;
        if !stats.is_empty() {
            println!();
            println!("{}", stats);
        }
    }

    Ok(())
}

/// Load the input files and build the tree.
pub fn build_tree(args: &TreeArgs, config: &TreeConfig) -> Result<FamilyTree> {
    let viewer = viewer_id(&args.input.viewer)?;
    let assertions = load_assertions(&args.input.assertions)?;
    let profiles = load_profiles(args.input.profiles.as_ref())?;

    let config = if args.strict {
        TreeConfig {
            synthesize_placeholders: false,
            ..config.clone()
        }
    } else {
        config.clone()
    };

    Ok(FamilyTreeBuilder::new(config).build(&assertions, &viewer, &profiles))
}
