use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

use miette::Result;

use crate::cli::GraphFormat;
use crate::detector::PackageCycle;
use crate::error::DepVizError;
use crate::graph::DependencyMap;
use crate::utils::string::escape_quoted;

mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD";
    pub const NORMAL_NODE_STROKE: &str = "#1976D2";
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0";
    pub const CYCLE_NODE_STROKE: &str = "#F57C00";
    pub const UNRESOLVED_NODE_STROKE: &str = "#90A4AE";
    pub const CYCLE_EDGE: &str = "#FF6500";
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(DepVizError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(DepVizError::from)
    };
}

/// Serializes a [`DependencyMap`] into diagram-description text
///
/// Output is driven purely by the map's enumeration order, which is sorted,
/// so the same map always renders to the same text.
pub struct GraphRenderer {
    highlight_cycles: bool,
}

impl Default for GraphRenderer {
    fn default() -> Self {
        Self::new(false)
    }
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool) -> Self {
        Self { highlight_cycles }
    }

    pub fn render(
        &self,
        format: GraphFormat,
        dependencies: &DependencyMap,
        cycles: &[PackageCycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        match format {
            GraphFormat::PlantUml => self.render_plantuml(dependencies, cycles, output),
            GraphFormat::Dot => self.render_dot(dependencies, cycles, output),
            GraphFormat::Mermaid => self.render_mermaid(dependencies, cycles, output),
        }
    }

    /// Render the PlantUML `digraph` description consumed by PlantUML's DOT
    /// support
    pub fn render_plantuml(
        &self,
        dependencies: &DependencyMap,
        cycles: &[PackageCycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "@startuml")?;
        writeln_out!(output, "digraph dependencies {{")?;

        for (package, requirement) in dependencies.edges() {
            if self.is_edge_in_cycle(package, requirement, cycles) {
                writeln_out!(
                    output,
                    r#"    "{}" -> "{}" [color="{}"];"#,
                    escape_quoted(package),
                    escape_quoted(requirement),
                    colors::CYCLE_EDGE
                )?;
            } else {
                writeln_out!(
                    output,
                    r#"    "{}" -> "{}";"#,
                    escape_quoted(package),
                    escape_quoted(requirement)
                )?;
            }
        }

        writeln_out!(output, "}}")?;
        writeln_out!(output, "@enduml")?;
        Ok(())
    }

    pub fn render_dot(
        &self,
        dependencies: &DependencyMap,
        cycles: &[PackageCycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "digraph dependencies {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=box, style=rounded];")?;
        writeln_out!(output)?;

        for (name, resolved) in Self::node_names(dependencies) {
            let in_cycle = self.highlight_cycles && Self::is_node_in_cycle(name, cycles);
            let (fill_color, stroke_color) = if in_cycle {
                (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
            } else if resolved {
                (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
            } else {
                (colors::NORMAL_NODE_FILL, colors::UNRESOLVED_NODE_STROKE)
            };
            let style = if resolved {
                "rounded,filled"
            } else {
                "rounded,filled,dashed"
            };

            writeln_out!(
                output,
                r#"    "{}" [style="{}", fillcolor="{}", color="{}"];"#,
                escape_quoted(name),
                style,
                fill_color,
                stroke_color
            )?;
        }

        writeln_out!(output)?;

        for (package, requirement) in dependencies.edges() {
            if self.is_edge_in_cycle(package, requirement, cycles) {
                writeln_out!(
                    output,
                    r#"    "{}" -> "{}" [color="{}", penwidth=2];"#,
                    escape_quoted(package),
                    escape_quoted(requirement),
                    colors::CYCLE_EDGE
                )?;
            } else {
                writeln_out!(
                    output,
                    r#"    "{}" -> "{}";"#,
                    escape_quoted(package),
                    escape_quoted(requirement)
                )?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    pub fn render_mermaid(
        &self,
        dependencies: &DependencyMap,
        cycles: &[PackageCycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "graph TD")?;

        // Package names may contain characters Mermaid rejects in ids, so
        // nodes get positional ids and carry the real name as a label.
        let nodes = Self::node_names(dependencies);
        let ids: BTreeMap<&str, String> = nodes
            .keys()
            .enumerate()
            .map(|(i, name)| (*name, format!("n{i}")))
            .collect();

        for (name, id) in &ids {
            writeln_out!(output, r#"    {}["{}"]"#, id, name.replace('"', "#quot;"))?;
        }

        let mut cycle_links = Vec::new();
        for (i, (package, requirement)) in dependencies.edges().enumerate() {
            writeln_out!(output, "    {} --> {}", ids[package], ids[requirement])?;
            if self.is_edge_in_cycle(package, requirement, cycles) {
                cycle_links.push(i.to_string());
            }
        }

        let unresolved: Vec<&str> = nodes
            .iter()
            .filter(|(_, resolved)| !**resolved)
            .map(|(name, _)| ids[name].as_str())
            .collect();
        if !unresolved.is_empty() {
            writeln_out!(
                output,
                "    classDef unresolved stroke:{},stroke-dasharray:5 5",
                colors::UNRESOLVED_NODE_STROKE
            )?;
            writeln_out!(output, "    class {} unresolved", unresolved.join(","))?;
        }

        if self.highlight_cycles && !cycles.is_empty() {
            let cycle_nodes: BTreeSet<&str> = nodes
                .keys()
                .filter(|name| Self::is_node_in_cycle(name, cycles))
                .map(|name| ids[name].as_str())
                .collect();
            if !cycle_nodes.is_empty() {
                writeln_out!(
                    output,
                    "    classDef cycle fill:{},stroke:{},stroke-width:2px",
                    colors::CYCLE_NODE_FILL,
                    colors::CYCLE_NODE_STROKE
                )?;
                writeln_out!(
                    output,
                    "    class {} cycle",
                    cycle_nodes.into_iter().collect::<Vec<_>>().join(",")
                )?;
            }
            if !cycle_links.is_empty() {
                writeln_out!(
                    output,
                    "    linkStyle {} stroke:{},stroke-width:2px",
                    cycle_links.join(","),
                    colors::CYCLE_EDGE
                )?;
            }
        }

        Ok(())
    }

    /// Render the PlantUML description into a string
    pub fn render_plantuml_string(&self, dependencies: &DependencyMap) -> Result<String> {
        let mut buffer = Vec::new();
        self.render_plantuml(dependencies, &[], &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| {
            DepVizError::GraphError {
                message: format!("Rendered diagram is not valid UTF-8: {e}"),
            }
            .into()
        })
    }

    /// Every node name with whether it was resolved, sorted by name
    fn node_names(dependencies: &DependencyMap) -> BTreeMap<&str, bool> {
        let mut nodes: BTreeMap<&str, bool> =
            dependencies.packages().map(|name| (name, true)).collect();
        for name in dependencies.unresolved() {
            nodes.insert(name, false);
        }
        nodes
    }

    fn is_node_in_cycle(name: &str, cycles: &[PackageCycle]) -> bool {
        cycles.iter().any(|cycle| cycle.contains_package(name))
    }

    fn is_edge_in_cycle(&self, from: &str, to: &str, cycles: &[PackageCycle]) -> bool {
        self.highlight_cycles && cycles.iter().any(|cycle| cycle.contains_edge(from, to))
    }
}
