use dioxus::prelude::*;

use crate::constants::*;
use crate::error::TimestampError;
use crate::state::Timestamp;

const FIELD_STYLE: &str = "
    width: 100%; min-width: 0; box-sizing: border-box;
    padding: 4px 6px; font-size: 12px;
    border-radius: 4px;
    outline: none;
    user-select: text;
";

/// Outcome of committing typed timestamp text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TimestampCommit {
    /// Parsed to a new value.
    Changed(Timestamp),
    /// Parsed to the value already held.
    Unchanged,
    /// Did not parse; the previous value stays.
    Reverted(TimestampError),
}

/// Decide what typed text does to a timestamp currently holding `previous`.
pub(crate) fn commit_timestamp(input: &str, previous: Timestamp) -> TimestampCommit {
    match Timestamp::parse(input.trim()) {
        Ok(parsed) if parsed == previous => TimestampCommit::Unchanged,
        Ok(parsed) => TimestampCommit::Changed(parsed),
        Err(err) => TimestampCommit::Reverted(err),
    }
}

/// `HH:MM:SS.D` input that commits on blur or Enter.
///
/// Text that does not parse is logged and replaced by the last good value.
#[component]
pub fn TimestampField(
    value: Timestamp,
    on_commit: EventHandler<Timestamp>,
    on_focus_change: EventHandler<bool>,
) -> Element {
    let mut text = use_signal(|| value.to_string());
    let mut last_prop_value = use_signal(|| value);
    let mut rejected = use_signal(|| false);

    use_effect(move || {
        let v = value;
        if v != last_prop_value() {
            text.set(v.to_string());
            last_prop_value.set(v);
        }
    });

    let make_commit = || {
        let mut text = text.clone();
        let mut last_prop_value = last_prop_value.clone();
        let mut rejected = rejected.clone();
        let on_commit = on_commit.clone();
        move || {
            let previous = last_prop_value();
            match commit_timestamp(&text(), previous) {
                TimestampCommit::Changed(parsed) => {
                    rejected.set(false);
                    on_commit.call(parsed);
                    last_prop_value.set(parsed);
                    text.set(parsed.to_string());
                }
                TimestampCommit::Unchanged => {
                    rejected.set(false);
                    text.set(previous.to_string());
                }
                TimestampCommit::Reverted(err) => {
                    log::warn!("{}; keeping {}", err, previous);
                    rejected.set(true);
                    text.set(previous.to_string());
                }
            }
        }
    };

    let mut commit_on_blur = make_commit();
    let mut commit_on_key = make_commit();

    let border = if rejected() { ACCENT_ERROR } else { BORDER_DEFAULT };

    rsx! {
        input {
            r#type: "text",
            value: "{text()}",
            spellcheck: "false",
            style: "{FIELD_STYLE} width: 92px; font-family: 'SF Mono', Consolas, monospace; background-color: {BG_SURFACE}; color: {TEXT_PRIMARY}; border: 1px solid {border};",
            oninput: move |e| text.set(e.value()),
            onfocus: move |_| on_focus_change.call(true),
            onblur: move |_| {
                commit_on_blur();
                on_focus_change.call(false);
            },
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Enter {
                    commit_on_key();
                }
            },
        }
    }
}

/// Free text input that commits on blur or Enter.
#[component]
pub fn TextField(
    value: String,
    #[props(default)] placeholder: String,
    /// Id of a `datalist` offering suggestions
    #[props(default)]
    list: String,
    on_commit: EventHandler<String>,
    on_focus_change: EventHandler<bool>,
) -> Element {
    let mut text = use_signal(|| value.clone());
    let mut last_prop_value = use_signal(|| value.clone());

    use_effect(move || {
        let v = value.clone();
        if v != last_prop_value() {
            text.set(v.clone());
            last_prop_value.set(v);
        }
    });

    let make_commit = || {
        let text = text.clone();
        let mut last_prop_value = last_prop_value.clone();
        let on_commit = on_commit.clone();
        move || {
            let next = text();
            if next != last_prop_value() {
                on_commit.call(next.clone());
                last_prop_value.set(next);
            }
        }
    };

    let mut commit_on_blur = make_commit();
    let mut commit_on_key = make_commit();

    rsx! {
        input {
            r#type: "text",
            value: "{text()}",
            placeholder: "{placeholder}",
            list: "{list}",
            style: "{FIELD_STYLE} background-color: {BG_SURFACE}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT};",
            oninput: move |e| text.set(e.value()),
            onfocus: move |_| on_focus_change.call(true),
            onblur: move |_| {
                commit_on_blur();
                on_focus_change.call(false);
            },
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Enter {
                    commit_on_key();
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_text_commits() {
        let previous = Timestamp::from_seconds(1.0);
        assert_eq!(
            commit_timestamp("00:00:07.2", previous),
            TimestampCommit::Changed(Timestamp::from_seconds(7.2))
        );
        assert_eq!(
            commit_timestamp(" 00:01:00.0 ", previous),
            TimestampCommit::Changed(Timestamp::from_seconds(60.0))
        );
    }

    #[test]
    fn test_same_value_is_unchanged() {
        let previous = Timestamp::from_seconds(3.5);
        assert_eq!(commit_timestamp("00:00:03.5", previous), TimestampCommit::Unchanged);
    }

    #[test]
    fn test_invalid_text_reverts() {
        let previous = Timestamp::from_seconds(3.5);
        for bad in ["", "3.5", "00:61:00.0", "abc"] {
            match commit_timestamp(bad, previous) {
                TimestampCommit::Reverted(TimestampError::Invalid { input, .. }) => {
                    assert_eq!(input, bad.trim());
                }
                other => panic!("{:?} gave {:?}", bad, other),
            }
        }
    }
}
