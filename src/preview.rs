use colored::Colorize;
use saadjie::TemplateNode;
use std::path::Path;

/// Print the parsed tree with a nice ASCII style, rooted at `destination`,
/// so the user can inspect what would be created before confirming.
pub fn preview_as_tree(nodes: &[TemplateNode], destination: &Path) {
    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    let fancy_prompt = format!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    println!("{}", fancy_prompt);

    println!("{}", root_name.blue());

    print_nodes(nodes, "");

    let fancy_prompt = format!(
        "\n\n{} {}\n",
        "└─".bold().bright_blue(),
        "Confirm below to apply".bright_green()
    );

    println!("{}", fancy_prompt);
}

fn print_nodes(nodes: &[TemplateNode], prefix: &str) {
    let len = nodes.len();

    for (i, node) in nodes.iter().enumerate() {
        let is_last = i == len - 1;

        let connector = if is_last {
            "└── ".yellow()
        } else {
            "├── ".yellow()
        };
        let name = match node {
            TemplateNode::Directory { name, .. } => name.blue(),
            TemplateNode::File { name, .. } => name.green(),
        };
        println!("{}{}{}", prefix.yellow(), connector, name);

        if let TemplateNode::Directory { children, .. } = node {
            let child_prefix = if is_last {
                format!("{}    ", prefix)
            } else {
                format!("{}│   ", prefix)
            };

            print_nodes(children, &child_prefix);
        }
    }
}
