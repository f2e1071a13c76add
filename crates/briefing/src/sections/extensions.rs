//! Extension-server (MCP) sections: the tools for calling servers, the live
//! list of connected servers, and guidance for creating new ones.
//!
//! All three render empty when the registry mode is off.

use super::RenderContext;
use crate::error::SectionError;
use crate::registry::RegistryEntry;

/// Shown in place of the server list when nothing is connected, or when the
/// registry could not be queried.
pub const NO_SERVERS_PLACEHOLDER: &str = "(No MCP servers currently connected)";

const EXTENSION_TOOLS: &str = "\
## use_mcp_tool
Description: Request to use a tool provided by a connected MCP server. Each MCP server \
can provide multiple tools with different capabilities. Tools have defined input \
schemas that specify required and optional parameters.
Parameters:
- server_name: (required) The name of the MCP server providing the tool
- tool_name: (required) The name of the tool to execute
- arguments: (required) A JSON object containing the tool's input parameters, \
following the tool's input schema
Usage:
<use_mcp_tool>
<server_name>server name here</server_name>
<tool_name>tool name here</tool_name>
<arguments>
{
  \"param1\": \"value1\",
  \"param2\": \"value2\"
}
</arguments>
</use_mcp_tool>

## access_mcp_resource
Description: Request to access a resource provided by a connected MCP server. \
Resources represent data sources that can be used as context, such as files, API \
responses, or system information.
Parameters:
- server_name: (required) The name of the MCP server providing the resource
- uri: (required) The URI identifying the specific resource to access
Usage:
<access_mcp_resource>
<server_name>server name here</server_name>
<uri>resource URI here</uri>
</access_mcp_resource>";

const SERVERS_PREAMBLE: &str = "\
====

MCP SERVERS

The Model Context Protocol (MCP) enables communication between the system and locally \
running MCP servers that provide additional tools and resources to extend your \
capabilities.

# Connected MCP Servers

When a server is connected, you can use the server's tools via the `use_mcp_tool` \
tool, and access the server's resources via the `access_mcp_resource` tool.";

pub(super) fn extension_tools(ctx: &RenderContext<'_>) -> Result<String, SectionError> {
    if !ctx.params.registry.is_enabled() {
        return Ok(String::new());
    }
    Ok(EXTENSION_TOOLS.to_string())
}

pub(super) fn extension_servers(ctx: &RenderContext<'_>) -> Result<String, SectionError> {
    if !ctx.params.registry.is_enabled() {
        return Ok(String::new());
    }
    let snapshot = ctx.require_registry()?;

    let servers = snapshot.connected();
    let listing = if servers.is_empty() {
        NO_SERVERS_PLACEHOLDER.to_string()
    } else {
        servers
            .iter()
            .map(render_server)
            .collect::<Vec<_>>()
            .join("\n\n")
    };

    Ok(format!("{SERVERS_PREAMBLE}\n\n{listing}"))
}

fn render_server(entry: &RegistryEntry) -> String {
    let command = entry.config.command_line();
    let mut out = if command.is_empty() {
        format!("## {}", entry.name)
    } else {
        format!("## {} (`{command}`)", entry.name)
    };

    if !entry.tools.is_empty() {
        out.push_str("\n\n### Available Tools");
        for tool in &entry.tools {
            if tool.description.is_empty() {
                out.push_str(&format!("\n- {}", tool.name));
            } else {
                out.push_str(&format!("\n- {}: {}", tool.name, tool.description));
            }
            if let Some(schema) = &tool.input_schema
                && let Ok(pretty) = serde_json::to_string_pretty(schema)
            {
                out.push_str("\n    Input Schema:");
                for line in pretty.lines() {
                    out.push_str("\n    ");
                    out.push_str(line);
                }
            }
        }
    }

    if !entry.resource_templates.is_empty() {
        out.push_str("\n\n### Resource Templates");
        for template in &entry.resource_templates {
            out.push_str(&format!("\n- {} ({})", template.uri_template, template.name));
            if let Some(description) = &template.description {
                out.push_str(&format!(": {description}"));
            }
        }
    }

    if !entry.resources.is_empty() {
        out.push_str("\n\n### Direct Resources");
        for resource in &entry.resources {
            let label = match &resource.mime_type {
                Some(mime) => format!("{}, {mime}", resource.name),
                None => resource.name.clone(),
            };
            out.push_str(&format!("\n- {} ({label})", resource.uri));
            if let Some(description) = &resource.description {
                out.push_str(&format!(": {description}"));
            }
        }
    }

    out
}

pub(super) fn extension_server_creation(ctx: &RenderContext<'_>) -> Result<String, SectionError> {
    if !ctx.params.registry.allows_server_creation() {
        return Ok(String::new());
    }
    let snapshot = ctx.require_registry()?;

    let location = match (&snapshot.install_path, &snapshot.settings_path) {
        (Some(Ok(install)), Some(Ok(settings))) => format!(
            "\
By default, create new MCP servers in {install}. Each server lives in its own \
directory there. After building a server, register it by adding its launch command, \
arguments, and environment to the settings file at {settings}; the system picks up \
the change and connects to the server automatically."
        ),
        _ => "\
Create new MCP servers in the MCP servers directory configured for this system, one \
directory per server. After building a server, register it in the MCP settings file \
so the system can connect to it. The exact locations could not be determined right \
now; ask the user for them before writing any files."
            .to_string(),
    };

    Ok(format!(
        "\
## Creating an MCP Server

The user may ask you something along the lines of \"add a tool\" that does some \
function, in other words to create an MCP server that provides tools and resources \
that may connect to external APIs for example. You have the ability to create an MCP \
server and add it to a configuration file that will then expose the tools and \
resources for you to use with `use_mcp_tool` and `access_mcp_resource`.

{location}

When creating a server:
- Bootstrap it with the MCP SDK for the project's language and implement its tools \
and resources against the protocol's stdio transport.
- Never hardcode credentials. If the server needs an API key or token, ask the user \
for it with `ask_followup_question` and pass it through the settings file's \
environment block.
- Do not overwrite existing entries in the settings file; add the new server alongside \
them.
- Once the new server appears under Connected MCP Servers, its tools are available \
to you immediately.

Remember: creating a server is not always needed. Connected servers may already \
provide the tools you need, and many tasks can be accomplished with the built-in \
tools alone."
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{CapabilityFlags, RegistryMode};
    use crate::compose::RegistrySnapshot;
    use crate::error::RegistryError;
    use crate::registry::{ResourceDescriptor, ResourceTemplate};
    use crate::sections::SectionId;
    use crate::sections::fixture::Fixture;
    use std::time::Duration;

    fn snapshot(servers: Vec<RegistryEntry>) -> RegistrySnapshot {
        RegistrySnapshot {
            servers: Ok(servers),
            install_path: Some(Ok("/home/dev/Documents/MCP".into())),
            settings_path: Some(Ok("/home/dev/.config/agent/mcp_settings.json".into())),
        }
    }

    #[test]
    fn off_mode_renders_nothing_without_snapshot() {
        let fixture = Fixture::new();
        let flags = CapabilityFlags::default().with_registry(RegistryMode::Off);
        for id in [
            SectionId::ExtensionTools,
            SectionId::ExtensionServers,
            SectionId::ExtensionServerCreation,
        ] {
            assert_eq!(fixture.render(id, &flags).unwrap(), "", "{id}");
        }
    }

    #[test]
    fn enabled_mode_without_snapshot_is_a_defect() {
        let err = Fixture::new()
            .render(SectionId::ExtensionServers, &CapabilityFlags::default())
            .unwrap_err();
        assert_eq!(
            err,
            SectionError::MissingParameter { parameter: "registry snapshot" }
        );
    }

    #[test]
    fn lists_server_with_tool_line() {
        let alpha = RegistryEntry::connected("alpha").with_tool("fetch", "retrieves a URL");
        let fixture = Fixture::new().with_registry(snapshot(vec![alpha]));
        let text = fixture
            .render(SectionId::ExtensionServers, &CapabilityFlags::default())
            .unwrap();
        assert!(text.contains("## alpha\n\n### Available Tools\n- fetch: retrieves a URL"));
        assert!(!text.contains(NO_SERVERS_PLACEHOLDER));
    }

    #[test]
    fn renders_command_schema_and_resources() {
        let mut entry = RegistryEntry::connected("weather")
            .with_command("node", &["build/index.js"])
            .with_tool("get_forecast", "Forecast for a city");
        entry.tools[0].input_schema = Some(serde_json::json!({
            "type": "object",
            "properties": { "city": { "type": "string" } }
        }));
        entry.resource_templates.push(ResourceTemplate {
            uri_template: "weather://{city}/current".into(),
            name: "Current weather".into(),
            description: Some("Live conditions".into()),
        });
        entry.resources.push(ResourceDescriptor {
            uri: "weather://stations".into(),
            name: "Stations".into(),
            mime_type: Some("application/json".into()),
            description: None,
        });

        let text = render_server(&entry);
        assert!(text.starts_with("## weather (`node build/index.js`)"));
        assert!(text.contains("    Input Schema:\n    {"));
        assert!(text.contains("- weather://{city}/current (Current weather): Live conditions"));
        assert!(text.contains("### Direct Resources\n- weather://stations (Stations, application/json)"));
    }

    #[test]
    fn empty_or_failed_listing_uses_placeholder() {
        let fixture = Fixture::new().with_registry(snapshot(Vec::new()));
        let text = fixture
            .render(SectionId::ExtensionServers, &CapabilityFlags::default())
            .unwrap();
        assert!(text.ends_with(NO_SERVERS_PLACEHOLDER));

        let failed = RegistrySnapshot {
            servers: Err(RegistryError::TimedOut(Duration::from_secs(2))),
            ..snapshot(Vec::new())
        };
        let text = Fixture::new()
            .with_registry(failed)
            .render(SectionId::ExtensionServers, &CapabilityFlags::default())
            .unwrap();
        assert!(text.ends_with(NO_SERVERS_PLACEHOLDER));
    }

    #[test]
    fn creation_guidance_embeds_paths() {
        let fixture = Fixture::new().with_registry(snapshot(Vec::new()));
        let text = fixture
            .render(SectionId::ExtensionServerCreation, &CapabilityFlags::default())
            .unwrap();
        assert!(text.contains("/home/dev/Documents/MCP"));
        assert!(text.contains("/home/dev/.config/agent/mcp_settings.json"));
    }

    #[test]
    fn creation_guidance_without_paths_stays_generic() {
        let snapshot = RegistrySnapshot {
            install_path: Some(Err(RegistryError::Unavailable("down".into()))),
            ..snapshot(Vec::new())
        };
        let text = Fixture::new()
            .with_registry(snapshot)
            .render(SectionId::ExtensionServerCreation, &CapabilityFlags::default())
            .unwrap();
        assert!(text.contains("could not be determined"));
        assert!(!text.contains("mcp_settings.json"));
    }

    #[test]
    fn server_use_only_skips_creation_guidance() {
        let fixture = Fixture::new().with_registry(snapshot(Vec::new()));
        let flags = CapabilityFlags::default().with_registry(RegistryMode::ServerUseOnly);
        assert_eq!(
            fixture.render(SectionId::ExtensionServerCreation, &flags).unwrap(),
            ""
        );
        assert!(!fixture.render(SectionId::ExtensionServers, &flags).unwrap().is_empty());
    }
}
