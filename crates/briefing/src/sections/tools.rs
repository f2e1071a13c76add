//! Contracts for the built-in tools.

use super::RenderContext;
use crate::error::SectionError;

pub(super) fn execute_command(ctx: &RenderContext<'_>) -> Result<String, SectionError> {
    Ok(format!(
        "\
## execute_command
Description: Request to execute a CLI command on the system. Use this when you need \
to perform system operations or run specific commands to accomplish any step in the \
user's task. You must tailor your command to the user's system and provide a clear \
explanation of what the command does. Prefer to execute complex CLI commands over \
creating executable scripts, as they are more flexible and easier to run. Commands \
will be executed in the current working directory: {cwd}
Parameters:
- command: (required) The CLI command to execute. This should be valid for the current \
operating system. Ensure the command is properly formatted and does not contain any \
harmful instructions.
- requires_approval: (required) A boolean indicating whether this command requires \
explicit user approval before execution. Set to 'true' for potentially impactful \
operations like installing or uninstalling packages, deleting or overwriting files, \
system configuration changes, network operations, or any commands that could have \
unintended side effects. Set to 'false' for safe operations like reading files or \
directories, running development servers, building projects, and other \
non-destructive operations.
Usage:
<execute_command>
<command>Your command here</command>
<requires_approval>true or false</requires_approval>
</execute_command>",
        cwd = ctx.cwd
    ))
}

pub(super) fn read_file(ctx: &RenderContext<'_>) -> Result<String, SectionError> {
    Ok(format!(
        "\
## read_file
Description: Request to read the contents of a file at the specified path. Use this \
when you need to examine the contents of an existing file you do not know the \
contents of, for example to analyze code, review text files, or extract information \
from configuration files. Automatically extracts raw text from PDF and DOCX files. \
May not be suitable for other types of binary files, as it returns the raw content \
as a string.
Parameters:
- path: (required) The path of the file to read (relative to the current working \
directory {cwd})
Usage:
<read_file>
<path>File path here</path>
</read_file>",
        cwd = ctx.cwd
    ))
}

pub(super) fn write_to_file(ctx: &RenderContext<'_>) -> Result<String, SectionError> {
    Ok(format!(
        "\
## write_to_file
Description: Request to write content to a file at the specified path. If the file \
exists, it will be overwritten with the provided content. If the file doesn't exist, \
it will be created. This tool will automatically create any directories needed to \
write the file.
Parameters:
- path: (required) The path of the file to write to (relative to the current working \
directory {cwd})
- content: (required) The content to write to the file. ALWAYS provide the COMPLETE \
intended content of the file, without any truncation or omissions. You MUST include \
ALL parts of the file, even if they haven't been modified.
Usage:
<write_to_file>
<path>File path here</path>
<content>
Your file content here
</content>
</write_to_file>",
        cwd = ctx.cwd
    ))
}

pub(super) fn replace_in_file(ctx: &RenderContext<'_>) -> Result<String, SectionError> {
    Ok(format!(
        "\
## replace_in_file
Description: Request to replace sections of content in an existing file using \
SEARCH/REPLACE blocks that define exact changes to specific parts of the file. This \
tool should be used when you need to make targeted changes to specific parts of a file.
Parameters:
- path: (required) The path of the file to modify (relative to the current working \
directory {cwd})
- diff: (required) One or more SEARCH/REPLACE blocks following this exact format:
  ```
  <<<<<<< SEARCH
  [exact content to find]
  =======
  [new content to replace with]
  >>>>>>> REPLACE
  ```
  Critical rules:
  1. SEARCH content must match the associated file section to find EXACTLY, \
character-for-character including whitespace, indentation, and line endings.
  2. SEARCH/REPLACE blocks will ONLY replace the first match occurrence. Use multiple \
unique blocks for multiple changes, listed in the order they appear in the file.
  3. Keep SEARCH/REPLACE blocks concise: include just the changing lines and a few \
surrounding lines if needed for uniqueness.
  4. To move code, use two blocks: one to delete it from the original location and \
one to insert it at the new location. To delete code, use an empty REPLACE section.
Usage:
<replace_in_file>
<path>File path here</path>
<diff>
Search and replace blocks here
</diff>
</replace_in_file>",
        cwd = ctx.cwd
    ))
}

pub(super) fn search_files(ctx: &RenderContext<'_>) -> Result<String, SectionError> {
    Ok(format!(
        "\
## search_files
Description: Request to perform a regex search across files in a specified directory, \
providing context-rich results. This tool searches for patterns or specific content \
across multiple files, displaying each match with encapsulating context.
Parameters:
- path: (required) The path of the directory to search in (relative to the current \
working directory {cwd}). This directory will be recursively searched.
- regex: (required) The regular expression pattern to search for. Uses Rust regex syntax.
- file_pattern: (optional) Glob pattern to filter files (e.g., '*.ts' for TypeScript \
files). If not provided, it will search all files (*).
Usage:
<search_files>
<path>Directory path here</path>
<regex>Your regex pattern here</regex>
<file_pattern>file pattern here (optional)</file_pattern>
</search_files>",
        cwd = ctx.cwd
    ))
}

pub(super) fn list_files(ctx: &RenderContext<'_>) -> Result<String, SectionError> {
    Ok(format!(
        "\
## list_files
Description: Request to list files and directories within the specified directory. If \
recursive is true, it will list all files and directories recursively. If recursive \
is false or not provided, it will only list the top-level contents. Do not use this \
tool to confirm the existence of files you may have created, as the user will let \
you know if the files were created successfully or not.
Parameters:
- path: (required) The path of the directory to list contents for (relative to the \
current working directory {cwd})
- recursive: (optional) Whether to list files recursively. Use true for recursive \
listing, false or omit for top-level only.
Usage:
<list_files>
<path>Directory path here</path>
<recursive>true or false (optional)</recursive>
</list_files>",
        cwd = ctx.cwd
    ))
}

pub(super) fn list_code_definition_names(ctx: &RenderContext<'_>) -> Result<String, SectionError> {
    Ok(format!(
        "\
## list_code_definition_names
Description: Request to list definition names (classes, functions, methods, etc.) \
used in source code files at the top level of the specified directory. This tool \
provides insights into the codebase structure and important constructs, \
encapsulating high-level concepts and relationships that are crucial for \
understanding the overall architecture.
Parameters:
- path: (required) The path of the directory (relative to the current working \
directory {cwd}) to list top level source code definitions for.
Usage:
<list_code_definition_names>
<path>Directory path here</path>
</list_code_definition_names>",
        cwd = ctx.cwd
    ))
}

const ASK_FOLLOWUP_QUESTION: &str = "\
## ask_followup_question
Description: Ask the user a question to gather additional information needed to \
complete the task. This tool should be used when you encounter ambiguities, need \
clarification, or require more details to proceed effectively. Use this tool \
judiciously to maintain a balance between gathering necessary information and \
avoiding excessive back-and-forth.
Parameters:
- question: (required) The question to ask the user. This should be a clear, \
specific question that addresses the information you need.
- options: (optional) An array of 2-5 options for the user to choose from. Each \
option should be a string describing a possible answer.
Usage:
<ask_followup_question>
<question>Your question here</question>
<options>
Array of options here (optional), e.g. [\"Option 1\", \"Option 2\", \"Option 3\"]
</options>
</ask_followup_question>";

const ATTEMPT_COMPLETION: &str = "\
## attempt_completion
Description: After each tool use, the user will respond with the result of that tool \
use. Once you've received the results of tool uses and can confirm that the task is \
complete, use this tool to present the result of your work to the user. Optionally \
you may provide a CLI command to showcase the result of your work.
IMPORTANT NOTE: This tool CANNOT be used until you've confirmed from the user that any \
previous tool uses were successful. Before using this tool, you must ask yourself \
whether you've confirmed success from the user for every previous tool use. If not, \
then DO NOT use this tool.
Parameters:
- result: (required) The result of the task. Formulate this result in a way that is \
final and does not require further input from the user. Don't end your result with \
questions or offers for further assistance.
- command: (optional) A CLI command to execute to show a live demo of the result to \
the user. For example, use `open index.html` to display a created html website. But \
DO NOT use commands like `echo` or `cat` that merely print text.
Usage:
<attempt_completion>
<result>
Your final result description here
</result>
<command>Command to demonstrate result (optional)</command>
</attempt_completion>";

pub(super) fn ask_followup_question(_ctx: &RenderContext<'_>) -> Result<String, SectionError> {
    Ok(ASK_FOLLOWUP_QUESTION.to_string())
}

pub(super) fn attempt_completion(_ctx: &RenderContext<'_>) -> Result<String, SectionError> {
    Ok(ATTEMPT_COMPLETION.to_string())
}

#[cfg(test)]
mod tests {
    use crate::capability::CapabilityFlags;
    use crate::sections::SectionId;
    use crate::sections::fixture::Fixture;

    #[test]
    fn file_tools_embed_working_directory() {
        let fixture = Fixture::new();
        let flags = CapabilityFlags::default();
        for id in [
            SectionId::ExecuteCommand,
            SectionId::ReadFile,
            SectionId::WriteToFile,
            SectionId::ReplaceInFile,
            SectionId::SearchFiles,
            SectionId::ListFiles,
            SectionId::ListCodeDefinitionNames,
        ] {
            let text = fixture.render(id, &flags).unwrap();
            assert!(text.starts_with(&format!("## {id}")), "{id} heading");
            assert!(text.contains("/home/dev/project"), "{id} mentions cwd");
        }
    }

    #[test]
    fn replace_in_file_documents_markers() {
        let text = Fixture::new()
            .render(SectionId::ReplaceInFile, &CapabilityFlags::default())
            .unwrap();
        assert!(text.contains("<<<<<<< SEARCH"));
        assert!(text.contains(">>>>>>> REPLACE"));
    }
}
