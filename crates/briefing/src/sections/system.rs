use super::RenderContext;
use crate::error::SectionError;

pub(super) fn system_information(ctx: &RenderContext<'_>) -> Result<String, SectionError> {
    let host = ctx.host;
    Ok(format!(
        "\
====

SYSTEM INFORMATION

Operating System: {os}
Default Shell: {shell}
Home Directory: {home}
Current Working Directory: {cwd}
Current Date: {date}",
        os = host.os_name,
        shell = host.default_shell,
        home = host.home_dir,
        cwd = ctx.cwd,
        date = host.today.format("%Y-%m-%d"),
    ))
}

const OBJECTIVE: &str = "\
====

OBJECTIVE

You accomplish a given task iteratively, breaking it down into clear steps and \
working through them methodically.

1. Analyze the user's task and set clear, achievable goals to accomplish it. \
Prioritize these goals in a logical order.
2. Work through these goals sequentially, utilizing available tools one at a time as \
necessary. Each goal should correspond to a distinct step in your problem-solving \
process. You will be informed on the work completed and what's remaining as you go.
3. Remember, you have extensive capabilities with access to a wide range of tools that \
can be used in powerful and clever ways as necessary to accomplish each goal. Before \
calling a tool, do some analysis within <thinking></thinking> tags. First, analyze \
the file structure provided in environment_details to gain context and insights for \
proceeding effectively. Then, think about which of the provided tools is the most \
relevant tool to accomplish the user's task. Next, go through each of the required \
parameters of the relevant tool and determine if the user has directly provided or \
given enough information to infer a value. If all of the required parameters are \
present or can be reasonably inferred, close the thinking tag and proceed with the \
tool use. If one of the values for a required parameter is missing, DO NOT invoke the \
tool and instead ask the user to provide the missing parameters using the \
ask_followup_question tool.
4. Once you've completed the user's task, you must use the attempt_completion tool to \
present the result of the task to the user.
5. The user may provide feedback, which you can use to make improvements and try \
again. But DO NOT continue in pointless back and forth conversations.";

pub(super) fn objective(_ctx: &RenderContext<'_>) -> Result<String, SectionError> {
    Ok(OBJECTIVE.to_string())
}

#[cfg(test)]
mod tests {
    use crate::capability::CapabilityFlags;
    use crate::sections::SectionId;
    use crate::sections::fixture::Fixture;

    #[test]
    fn system_information_lists_host_facts() {
        let text = Fixture::new()
            .render(SectionId::SystemInformation, &CapabilityFlags::default())
            .unwrap();
        assert!(text.contains("Operating System: Linux"));
        assert!(text.contains("Default Shell: /bin/bash"));
        assert!(text.contains("Home Directory: /home/dev"));
        assert!(text.contains("Current Working Directory: /home/dev/project"));
        assert!(text.ends_with("Current Date: 2025-03-14"));
    }
}
