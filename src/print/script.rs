//! Page-side print trigger.

use std::time::Duration;

/// The `<script>` that opens the browser's print dialog after `delay`.
///
/// The pending timer is cleared on `pagehide` so a page being torn down
/// never prints.
///
/// ```
/// use std::time::Duration;
/// use advisory_receipt::print::browser_script;
///
/// let script = browser_script(Duration::from_millis(800));
/// assert!(script.contains("window.print()"));
/// assert!(script.contains(", 800);"));
/// ```
pub fn browser_script(delay: Duration) -> String {
    format!(
        r#"<script>
(function () {{
  var timer = window.setTimeout(function () {{
    timer = null;
    window.print();
  }}, {delay});
  window.addEventListener("pagehide", function () {{
    if (timer !== null) {{
      window.clearTimeout(timer);
      timer = null;
    }}
  }});
}})();
</script>"#,
        delay = delay.as_millis()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_is_embedded() {
        let script = browser_script(Duration::from_millis(1500));
        assert!(script.contains("}, 1500);"));
    }

    #[test]
    fn test_clears_timer_on_pagehide() {
        let script = browser_script(Duration::from_millis(800));
        assert!(script.contains(r#"addEventListener("pagehide""#));
        assert!(script.contains("clearTimeout(timer)"));
    }

    #[test]
    fn test_balanced_script_tag() {
        let script = browser_script(Duration::ZERO);
        assert!(script.starts_with("<script>"));
        assert!(script.ends_with("</script>"));
        assert_eq!(script.matches('{').count(), script.matches('}').count());
    }
}
