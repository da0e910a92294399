// Copyright 2026 The Matrix.org Foundation C.I.C.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! End-to-end flows over the public API, as a platform shell drives them.

use speculoos::prelude::*;

use linksheet::{
    Format, FormatSpan, LinkAction, LinkEvent, LinkSheet, RichTextValue,
    SheetUpdate, TextUpdate,
};

fn committed_value(update: &SheetUpdate) -> RichTextValue {
    match &update.text_update {
        TextUpdate::ReplaceAll(value) => value.clone(),
        TextUpdate::Keep => panic!("expected a committed edit"),
    }
}

fn linked_value(
    text: &str,
    start: usize,
    end: usize,
    url: &str,
) -> RichTextValue {
    let span = FormatSpan {
        start,
        end,
        format: Format::link(url, false),
    };
    RichTextValue::with_spans(text, &[span], 0, 0).expect("valid spans")
}

#[test]
fn inserting_a_link_from_a_collapsed_cursor() {
    let value = RichTextValue::from_text("hello world").select(5, 5);
    assert_that!(value.link_action())
        .is_equal_to(LinkAction::CreateWithText);

    let mut sheet = LinkSheet::new(value, false, None);
    sheet.set_url("matrix.org");
    sheet.set_text(" Matrix");
    let update = sheet.submit();

    assert_that!(update.dismiss).is_true();
    let new_value = committed_value(&update);
    assert_that!(new_value.text_content())
        .is_equal_to("hello Matrix world".to_owned());
    assert_that!(new_value.to_html()).is_equal_to(
        "hello<a href=\"http://matrix.org\"> Matrix</a> world".to_owned(),
    );
}

#[test]
fn editing_a_link_in_place() {
    let value = linked_value("visit matrix now", 6, 12, "https://matrix.org")
        .select(9, 9);
    assert_that!(value.link_action())
        .is_equal_to(LinkAction::Edit("https://matrix.org".to_owned()));

    let mut sheet = LinkSheet::new(value, true, Some("https://matrix.org"));
    assert_that!(sheet.text()).is_equal_to("matrix");

    sheet.set_url("https://element.io");
    let update = sheet.submit();

    let new_value = committed_value(&update);
    assert_that!(new_value.text_content())
        .is_equal_to("visit matrix now".to_owned());
    assert_that!(new_value.to_html()).is_equal_to(
        "visit <a href=\"https://element.io\">matrix</a> now".to_owned(),
    );
}

#[test]
fn relabelling_a_link_replaces_only_its_span() {
    let value = linked_value("visit matrix now", 6, 12, "https://matrix.org")
        .select(9, 9);
    let mut sheet = LinkSheet::new(value, true, Some("https://matrix.org"));
    sheet.set_text("element");
    let update = sheet.submit();

    let new_value = committed_value(&update);
    assert_that!(new_value.text_content())
        .is_equal_to("visit element now".to_owned());
    let spans = new_value.format_spans();
    assert_that!(spans).has_length(1);
    assert_that!(spans[0].start).is_equal_to(6);
    assert_that!(spans[0].end).is_equal_to(13);
}

#[test]
fn wrapping_a_range_selection_in_a_link() {
    let value = RichTextValue::from_text("say hello").select(4, 9);
    assert_that!(value.link_action()).is_equal_to(LinkAction::Create);

    let mut sheet = LinkSheet::new(value, false, None);
    sheet.set_url("https://matrix.org");
    let update = sheet.submit();

    let new_value = committed_value(&update);
    assert_that!(new_value.text_content())
        .is_equal_to("say hello".to_owned());
    assert_that!(new_value.to_html()).is_equal_to(
        "say <a href=\"https://matrix.org\">hello</a>".to_owned(),
    );
}

#[test]
fn resolver_expands_to_the_link_bounds_at_text_edges() {
    // Link touching both ends of the text
    let value =
        linked_value("linked", 0, 6, "https://matrix.org").select(3, 3);
    let sheet = LinkSheet::new(value, true, Some("https://matrix.org"));
    let link = sheet.link_selection();
    assert_that!(link.sel_start()).is_equal_to(0);
    assert_that!(link.sel_end()).is_equal_to(6);
}

#[test]
fn removing_a_link_leaves_the_document_to_the_host() {
    let value =
        linked_value("hello", 0, 5, "https://matrix.org").select(2, 2);
    let mut sheet = LinkSheet::new(value, true, Some("https://matrix.org"));
    sheet.set_text("edited but never submitted");

    let update = sheet.remove();
    assert_that!(update.link_event).is_equal_to(LinkEvent::Removed);
    assert_that!(update.text_update).is_equal_to(TextUpdate::Keep);
    assert_that!(update.dismiss).is_true();
}

#[test]
fn host_round_trips_values_through_the_span_form() {
    let value = linked_value("say hello there", 4, 9, "https://matrix.org")
        .select(6, 6);
    let rebuilt = RichTextValue::with_spans(
        &value.text_content(),
        &value.format_spans(),
        value.start(),
        value.end(),
    )
    .expect("round trip");
    assert_that!(rebuilt).is_equal_to(value);
}

#[test]
fn hosts_get_errors_for_bad_span_data() {
    let span = FormatSpan {
        start: 0,
        end: 10,
        format: Format::link("https://matrix.org", false),
    };
    let result = RichTextValue::with_spans("abc", &[span], 0, 0);
    assert_that!(result).is_err();
}

#[test]
fn debug_tree_shows_the_resolved_selection() {
    let value = linked_value("ab cd", 3, 5, "https://matrix.org");
    let sheet =
        LinkSheet::new(value.select(4, 4), true, Some("https://matrix.org"));
    let tree = sheet.link_selection().to_tree();
    assert_that!(tree.as_str()).is_equal_to(
        "sel: (3,5)\n│  \"ab \"\n│  \"{cd}\" [link url=\"https://matrix.org\"]\n",
    );
}
