use super::RenderContext;
use crate::error::SectionError;

/// The interactive automation tool. Only planned when automation is
/// available, so a missing or degenerate viewport here is a wiring defect.
pub(super) fn browser_action(ctx: &RenderContext<'_>) -> Result<String, SectionError> {
    let viewport = ctx.params.automation.ok_or(SectionError::MissingParameter {
        parameter: "viewport",
    })?;
    if viewport.width == 0 || viewport.height == 0 {
        return Err(SectionError::InvalidParameter {
            parameter: "viewport",
            reason: format!("{viewport} has a zero dimension"),
        });
    }

    Ok(format!(
        "\
## browser_action
Description: Request to interact with a Puppeteer-controlled browser. Every action, \
except `close`, will be responded to with a screenshot of the browser's current state, \
along with any new console logs. You may only perform one browser action per message, \
and wait for the user's response including a screenshot and logs to determine the \
next action.
- The sequence of actions **must always start with** launching the browser at a URL, \
and **must always end with** closing the browser. If you need to visit a new URL that \
is not possible to navigate to from the current webpage, you must first close the \
browser, then launch again at the new URL.
- While the browser is active, only the `browser_action` tool can be used. No other \
tools should be called during this time. You may proceed to use other tools only \
after closing the browser.
- The browser window has a resolution of **{viewport}** pixels. When performing any \
click actions, ensure the coordinates are within this resolution range.
- Before clicking on any elements such as icons, links, or buttons, you must consult \
the provided screenshot of the page to determine the coordinates of the element. The \
click should be targeted at the **center of the element**, not on its edges.
Parameters:
- action: (required) The action to perform. The available actions are:
    * launch: Launch a new Puppeteer-controlled browser instance at the specified URL. \
This **must always be the first action**.
        - Use with the `url` parameter to provide the URL.
        - Ensure the URL is valid and includes the appropriate protocol.
    * click: Click at a specific x,y coordinate.
        - Use with the `coordinate` parameter to specify the location.
        - Always click in the center of an element based on coordinates derived \
from a screenshot.
    * type: Type a string of text on the keyboard.
        - Use with the `text` parameter to provide the string to type.
    * scroll_down: Scroll down the page by one page height.
    * scroll_up: Scroll up the page by one page height.
    * close: Close the Puppeteer-controlled browser instance. This **must always be \
the final browser action**.
- url: (optional) Use this for providing the URL for the `launch` action.
- coordinate: (optional) The X and Y coordinates for the `click` action. Coordinates \
should be within the **{viewport}** resolution.
- text: (optional) Use this for providing the text for the `type` action.
Usage:
<browser_action>
<action>Action to perform (e.g., launch, click, type, scroll_down, scroll_up, close)</action>
<url>URL to launch the browser at (optional)</url>
<coordinate>x,y coordinates (optional)</coordinate>
<text>Text to type (optional)</text>
</browser_action>"
    ))
}

#[cfg(test)]
mod tests {
    use crate::capability::{CapabilityFlags, Viewport};
    use crate::error::SectionError;
    use crate::sections::fixture::Fixture;
    use crate::sections::{RenderContext, SectionId, SectionParams};

    #[test]
    fn renders_viewport_resolution() {
        let flags = CapabilityFlags::default()
            .with_automation(true)
            .with_viewport(Viewport::new(1280, 800));
        let text = Fixture::new().render(SectionId::BrowserAction, &flags).unwrap();
        assert!(text.contains("**1280x800** pixels"));
    }

    #[test]
    fn missing_viewport_is_a_defect() {
        let err = Fixture::new()
            .render(SectionId::BrowserAction, &CapabilityFlags::default())
            .unwrap_err();
        assert_eq!(err, SectionError::MissingParameter { parameter: "viewport" });
    }

    #[test]
    fn zero_sized_viewport_is_a_defect() {
        let fixture = Fixture::new();
        let ctx = RenderContext {
            params: SectionParams {
                automation: Some(Viewport::new(0, 600)),
                ..SectionParams::from_flags(&CapabilityFlags::default())
            },
            ..fixture.ctx(&CapabilityFlags::default())
        };
        let err = super::browser_action(&ctx).unwrap_err();
        assert!(matches!(err, SectionError::InvalidParameter { parameter: "viewport", .. }));
    }
}
