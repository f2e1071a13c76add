use super::RenderContext;
use crate::compose::DocumentBuilder;
use crate::error::SectionError;

pub(super) fn capabilities(ctx: &RenderContext<'_>) -> Result<String, SectionError> {
    let cwd = ctx.cwd;
    let automation = ctx.params.automation.is_some();

    let tool_overview = if automation {
        "- You have access to tools that let you execute CLI commands on the user's \
computer, list files, view source code definitions, regex search, use the browser, \
read and edit files, and ask follow-up questions. These tools help you effectively \
accomplish a wide range of tasks, such as writing code, making edits or improvements \
to existing files, understanding the current state of a project, performing system \
operations, and much more."
    } else {
        "- You have access to tools that let you execute CLI commands on the user's \
computer, list files, view source code definitions, regex search, read and edit \
files, and ask follow-up questions. These tools help you effectively accomplish a \
wide range of tasks, such as writing code, making edits or improvements to existing \
files, understanding the current state of a project, performing system operations, \
and much more."
    };

    Ok(DocumentBuilder::new()
        .block("====\n\nCAPABILITIES")
        .block(tool_overview)
        .block(format!(
            "\
- When the user initially gives you a task, a recursive list of all filepaths in the \
current working directory ('{cwd}') will be included in environment_details. This \
provides an overview of the project's file structure, offering key insights into the \
project from directory/file names and file extensions. If you need to further \
explore directories such as outside the current working directory, you can use the \
list_files tool."
        ))
        .block(
            "\
- You can use search_files to perform regex searches across files in a specified \
directory, outputting context-rich results that include surrounding lines. This is \
particularly useful for understanding code patterns, finding specific \
implementations, or identifying areas that need refactoring.",
        )
        .block(
            "\
- You can use the list_code_definition_names tool to get an overview of source code \
definitions for all files at the top level of a specified directory. You may need to \
call this tool multiple times to understand various parts of the codebase related to \
the task.",
        )
        .block(
            "\
- You can use the execute_command tool to run commands on the user's computer \
whenever you feel it can help accomplish the user's task. When you need to execute a \
CLI command, you must provide a clear explanation of what the command does. Each \
command you execute is run in a new terminal instance.",
        )
        .block_if(automation, || {
            "\
- You can use the browser_action tool to interact with websites (including html \
files and locally running development servers) through a Puppeteer-controlled \
browser when you feel it is necessary in accomplishing the user's task. This tool is \
particularly useful for web development tasks as it allows you to launch a browser, \
navigate to pages, interact with elements through clicks and keyboard input, and \
capture the results through screenshots and console logs."
                .to_string()
        })
        .block_if(ctx.params.registry.is_enabled(), || {
            "\
- You have access to MCP servers that may provide additional tools and resources. \
Each server may provide different capabilities that you can use to accomplish tasks \
more effectively."
                .to_string()
        })
        .build())
}

#[cfg(test)]
mod tests {
    use crate::capability::{CapabilityFlags, RegistryMode};
    use crate::sections::SectionId;
    use crate::sections::fixture::Fixture;

    #[test]
    fn browser_paragraph_tracks_automation() {
        let fixture = Fixture::new();
        let without = fixture
            .render(SectionId::Capabilities, &CapabilityFlags::default())
            .unwrap();
        assert!(!without.contains("browser_action"));

        let with = fixture
            .render(
                SectionId::Capabilities,
                &CapabilityFlags::default().with_automation(true),
            )
            .unwrap();
        assert!(with.contains("browser_action"));
        assert!(with.contains("use the browser"));
    }

    #[test]
    fn mcp_paragraph_tracks_registry_mode() {
        let fixture = Fixture::new();
        let off = CapabilityFlags::default().with_registry(RegistryMode::Off);
        assert!(!fixture.render(SectionId::Capabilities, &off).unwrap().contains("MCP"));
        assert!(
            fixture
                .render(SectionId::Capabilities, &CapabilityFlags::default())
                .unwrap()
                .contains("MCP servers")
        );
    }
}
