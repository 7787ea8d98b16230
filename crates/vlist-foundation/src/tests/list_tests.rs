use super::{uniform, viewport, ScriptedGesture};
use crate::context::LayoutContext;
use crate::lazy::{
    BuiltItem, IterationDirection, List, ListConfig, ListMeasureResult, Position, ProtocolError,
    MAX_ITEMS_PER_FRAME,
};
use vlist_graphics::{Color, DrawRecorder, Painter, Point, Rect, Size};
use vlist_layout::{Alignment, Constraints};

fn scripted(config: ListConfig) -> List<ScriptedGesture> {
    List::with_gesture(config, ScriptedGesture::default())
}

/// Runs one frame through the low-level protocol, recording every request.
fn drive(
    list: &mut List<ScriptedGesture>,
    ctx: &LayoutContext,
    item_count: usize,
    size_of: impl Fn(usize) -> Size,
    requests: &mut Vec<(IterationDirection, usize)>,
) -> ListMeasureResult {
    list.begin_frame(ctx, item_count).expect("begin frame");
    let mut built_main = 0;
    loop {
        let direction = list.request_next().expect("request next");
        if !direction.is_pending() {
            break;
        }
        let index = list.current_index().expect("current index");
        requests.push((direction, index));
        let size = size_of(index);
        built_main += size.height;
        list.submit_item(BuiltItem::new(size, DrawRecorder::new().finish()))
            .expect("submit item");
    }

    // Covered or exhausted once iteration stops.
    let position = list.position();
    let viewport_main = ctx.constraints.max_height;
    assert!(
        built_main - position.offset() >= viewport_main || requests.len() == item_count,
        "iteration stopped with an uncovered viewport"
    );

    list.finish(&mut Painter::new()).expect("finish")
}

#[test]
fn built_window_stays_contiguous_across_scrolling() {
    let mut list = scripted(ListConfig::vertical());
    let ctx = viewport(100, 50);
    let size_of = |index: usize| Size::new(100, 5 + (index % 7) as i32 * 3);

    for delta in [0, 37, 120, -15, -300, 64, 1_000, -9, -2_000] {
        list.gesture_mut().push(delta);
        let mut requests = Vec::new();
        let result = drive(&mut list, &ctx, 60, size_of, &mut requests);

        let mut low = None::<usize>;
        let mut high = None::<usize>;
        for (direction, index) in requests {
            match direction {
                IterationDirection::Forward => {
                    if let Some(h) = high {
                        assert_eq!(index, h + 1);
                    }
                    high = Some(index);
                    low.get_or_insert(index);
                }
                IterationDirection::Backward => {
                    if let Some(l) = low {
                        assert_eq!(index + 1, l);
                    }
                    low = Some(index);
                    high.get_or_insert(index);
                }
                IterationDirection::None => unreachable!(),
            }
        }

        let placed: Vec<usize> = result.visible_indices().collect();
        let expected: Vec<usize> =
            (result.first_visible..result.first_visible + placed.len()).collect();
        assert_eq!(placed, expected);
        assert!(result.first_visible <= 60);
    }
}

#[test]
fn layout_without_input_is_idempotent() {
    let mut list = scripted(ListConfig::vertical());
    let ctx = viewport(100, 50);
    list.set_position(Position::new(12, 4));

    let first = list
        .layout(&ctx, &mut Painter::new(), 40, uniform(Size::new(100, 9)))
        .expect("layout");
    let position = list.position();
    let second = list
        .layout(&ctx, &mut Painter::new(), 40, uniform(Size::new(100, 9)))
        .expect("layout");

    assert_eq!(first, second);
    assert_eq!(position, list.position());
}

#[test]
fn huge_forward_scroll_lands_flush_with_the_end() {
    let mut list = scripted(ListConfig::vertical());
    let ctx = viewport(100, 50);
    list.gesture_mut().push(1_000_000);

    let result = list
        .layout(&ctx, &mut Painter::new(), 100, uniform(Size::new(100, 10)))
        .expect("layout");

    let position = list.position();
    assert_eq!(position.first(), 95);
    assert_eq!(position.offset(), 0);
    assert!(!position.before_end());
    assert_eq!(result.visible_indices().collect::<Vec<_>>(), vec![95, 96, 97, 98, 99]);
    assert_eq!(result.placed[0].main_offset, 0);
    assert_eq!(result.placed[4].main_offset, 40);
    assert_eq!(result.size, Size::new(100, 50));
    assert!(result.at_end);
    assert_eq!(list.gesture().stops, 1);
}

#[test]
fn negative_offset_is_filled_with_one_backward_item() {
    let mut list = scripted(ListConfig::vertical());
    let ctx = viewport(100, 50);
    list.set_position(Position::new(10, -5));

    let mut requests = Vec::new();
    drive(&mut list, &ctx, 100, |_| Size::new(100, 20), &mut requests);

    let backward: Vec<usize> = requests
        .iter()
        .filter(|(direction, _)| *direction == IterationDirection::Backward)
        .map(|&(_, index)| index)
        .collect();
    assert_eq!(backward, vec![9]);
    assert_eq!(list.position().first(), 9);
    assert_eq!(list.position().offset(), 15);
}

#[test]
fn scrolling_before_the_start_stops_the_gesture() {
    let mut list = scripted(ListConfig::vertical());
    let ctx = viewport(100, 50);
    list.set_position(Position::new(0, 0));
    list.gesture_mut().push(-25);

    let result = list
        .layout(&ctx, &mut Painter::new(), 100, uniform(Size::new(100, 10)))
        .expect("layout");

    assert!(result.at_start);
    assert_eq!(list.position().offset(), 0);
    assert_eq!(list.gesture().stops, 1);
}

#[test]
fn scrolling_within_the_list_keeps_momentum() {
    let mut list = scripted(ListConfig::vertical());
    let ctx = viewport(100, 50);
    list.gesture_mut().push(25);

    list.layout(&ctx, &mut Painter::new(), 100, uniform(Size::new(100, 10)))
        .expect("layout");

    assert_eq!(list.position(), Position::new(2, 5));
    assert_eq!(list.gesture().stops, 0);
}

#[test]
fn short_pinned_list_hugs_the_trailing_edge() {
    let mut list = scripted(ListConfig::vertical().scroll_to_end(true));
    let ctx = viewport(100, 50);
    let mut painter = Painter::new();

    let result = list
        .layout(&ctx, &mut painter, 3, uniform(Size::new(100, 10)))
        .expect("layout");

    assert_eq!(result.placed[0].main_offset, 20);
    assert_eq!(painter.painted()[0].rect.min, Point::new(0, 20));
    assert_eq!(result.size.height, 50);
    assert!(list.is_pinned_to_end());
}

#[test]
fn items_are_centered_on_the_cross_axis() {
    let mut list = scripted(ListConfig::vertical().alignment(Alignment::Middle));
    let ctx = viewport(100, 50);
    let widths = [10, 20, 15];

    let result = list
        .layout(
            &ctx,
            &mut Painter::new(),
            widths.len(),
            |index: usize, _: Constraints, _: &mut DrawRecorder| Size::new(widths[index], 10),
        )
        .expect("layout");

    let offsets: Vec<i32> = result.placed.iter().map(|item| item.cross_offset).collect();
    assert_eq!(offsets, vec![5, 0, 2]);
    assert_eq!(result.size.width, 20);
}

#[test]
fn items_are_built_with_unbounded_main_axis() {
    let mut list = scripted(ListConfig::vertical());
    let ctx = viewport(80, 50);
    let mut seen = Vec::new();

    list.layout(
        &ctx,
        &mut Painter::new(),
        1,
        |_: usize, constraints: Constraints, _: &mut DrawRecorder| {
            seen.push(constraints);
            Size::new(80, 10)
        },
    )
    .expect("layout");

    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].max_width, 80);
    assert!(!seen[0].is_bounded());
    assert_eq!(seen[0].min_height, 0);
}

#[test]
fn position_past_item_count_is_clamped() {
    let mut list = scripted(ListConfig::vertical());
    let ctx = viewport(100, 50);
    list.set_position(Position::new(500, 7));

    let result = list
        .layout(&ctx, &mut Painter::new(), 20, uniform(Size::new(100, 10)))
        .expect("layout");

    assert_eq!(list.position().first(), 15);
    assert_eq!(list.position().offset(), 0);
    assert!(result.at_end);
}

#[test]
fn shrinking_list_resolves_to_valid_position() {
    let mut list = scripted(ListConfig::vertical());
    let ctx = viewport(100, 50);
    list.set_position(Position::new(80, 3));
    list.layout(&ctx, &mut Painter::new(), 100, uniform(Size::new(100, 10)))
        .expect("layout");

    let result = list
        .layout(&ctx, &mut Painter::new(), 4, uniform(Size::new(100, 10)))
        .expect("layout");

    assert_eq!(list.position().first(), 0);
    assert_eq!(list.position().offset(), 0);
    assert_eq!(result.visible_indices().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    assert!(result.at_start && result.at_end);
}

#[test]
fn empty_list_occupies_minimum_size() {
    let mut list = scripted(ListConfig::vertical());
    let ctx = LayoutContext::new(
        Constraints {
            min_width: 0,
            max_width: 100,
            min_height: 30,
            max_height: 50,
        },
        web_time::Instant::now(),
    );

    let result = list
        .layout(&ctx, &mut Painter::new(), 0, uniform(Size::new(100, 10)))
        .expect("layout");

    assert!(result.placed.is_empty());
    assert_eq!(result.size, Size::new(0, 30));
    assert_eq!(list.position().first(), 0);
    assert_eq!(list.position().offset(), 0);
}

#[test]
fn position_at_item_count_has_no_items_and_no_offset() {
    let mut list = scripted(ListConfig::vertical());
    // A collapsed viewport needs no items at all.
    let ctx = viewport(100, 0);
    list.set_position(Position::new(12, 30));

    let result = list
        .layout(&ctx, &mut Painter::new(), 12, uniform(Size::new(100, 10)))
        .expect("layout");

    assert_eq!(list.position().first(), 12);
    assert_eq!(list.position().offset(), 0);
    assert!(result.placed.is_empty());
}

#[test]
fn pinned_list_follows_appended_items_until_scrolled_back() {
    let mut list = scripted(ListConfig::vertical().scroll_to_end(true));
    let ctx = viewport(100, 50);

    list.layout(&ctx, &mut Painter::new(), 10, uniform(Size::new(100, 10)))
        .expect("layout");
    assert_eq!(list.position().first(), 5);
    assert!(list.is_pinned_to_end());

    let result = list
        .layout(&ctx, &mut Painter::new(), 12, uniform(Size::new(100, 10)))
        .expect("layout");
    assert_eq!(list.position().first(), 7);
    assert_eq!(result.visible_indices().last(), Some(11));
    assert!(list.is_pinned_to_end());

    list.gesture_mut().push(-15);
    let result = list
        .layout(&ctx, &mut Painter::new(), 12, uniform(Size::new(100, 10)))
        .expect("layout");
    assert!(!list.is_pinned_to_end());
    assert_eq!(list.position(), Position::new(5, 5));
    assert!(!result.at_end);

    // No longer follows new items.
    list.layout(&ctx, &mut Painter::new(), 20, uniform(Size::new(100, 10)))
        .expect("layout");
    assert_eq!(list.position(), Position::new(5, 5));
}

#[test]
fn horizontal_list_places_items_along_x() {
    let mut list = scripted(ListConfig::horizontal());
    let ctx = viewport(100, 40);
    let mut painter = Painter::new();
    list.gesture_mut().push(45);

    let result = list
        .layout(&ctx, &mut painter, 10, uniform(Size::new(30, 40)))
        .expect("layout");

    assert_eq!(list.position(), Position::new(1, 15));
    assert_eq!(result.size, Size::new(100, 40));
    let xs: Vec<i32> = painter.painted().iter().map(|p| p.rect.min.x).collect();
    assert_eq!(xs, vec![-15, 15, 45, 75]);
    assert_eq!(
        painter.painted()[0].visible(),
        Rect::from_min_max(Point::new(0, 0), Point::new(15, 40))
    );
}

#[test]
fn hit_region_covers_the_list() {
    let mut list = scripted(ListConfig::vertical());
    let ctx = viewport(100, 50);
    let mut painter = Painter::new();

    let result = list
        .layout(&ctx, &mut painter, 2, uniform(Size::new(60, 10)))
        .expect("layout");

    let bounds = Rect::from_size(result.size);
    assert_eq!(bounds, Rect::from_size(Size::new(60, 20)));
    assert_eq!(painter.hit_regions(), &[bounds]);
    assert_eq!(list.gesture().registered, Some(bounds));
}

#[test]
fn item_content_is_clipped_to_the_viewport() {
    let mut list = scripted(ListConfig::vertical());
    let ctx = viewport(100, 50);
    let mut painter = Painter::new();
    list.set_position(Position::new(0, 5));

    list.layout(
        &ctx,
        &mut painter,
        3,
        |_: usize, _: Constraints, recorder: &mut DrawRecorder| {
            recorder.fill_rect(Rect::from_size(Size::new(100, 30)), Color::RED);
            Size::new(100, 30)
        },
    )
    .expect("layout");

    let visible: Vec<Rect> = painter.painted().iter().map(|p| p.visible()).collect();
    assert_eq!(
        visible,
        vec![
            Rect::from_min_max(Point::new(0, 0), Point::new(100, 25)),
            Rect::from_min_max(Point::new(0, 25), Point::new(100, 50)),
        ]
    );
}

#[test]
fn programmatic_scrolling_applies_on_next_layout() {
    let mut list = scripted(ListConfig::vertical());
    let ctx = viewport(100, 50);

    list.scroll_by(23);
    list.layout(&ctx, &mut Painter::new(), 100, uniform(Size::new(100, 10)))
        .expect("layout");
    assert_eq!(list.position(), Position::new(2, 3));

    list.scroll_to(40);
    let result = list
        .layout(&ctx, &mut Painter::new(), 100, uniform(Size::new(100, 10)))
        .expect("layout");
    assert_eq!(result.first_visible, 40);
    assert_eq!(list.position().offset(), 0);
}

#[test]
fn saved_position_restores_an_identical_frame() {
    let ctx = viewport(100, 50);
    let mut list = scripted(ListConfig::vertical());
    list.gesture_mut().push(333);
    let original = list
        .layout(&ctx, &mut Painter::new(), 100, uniform(Size::new(100, 7)))
        .expect("layout");

    let mut restored = scripted(ListConfig::vertical());
    restored.set_position(list.position());
    let result = restored
        .layout(&ctx, &mut Painter::new(), 100, uniform(Size::new(100, 7)))
        .expect("layout");

    assert_eq!(original, result);
}

#[test]
fn zero_sized_items_stop_at_the_build_cap() {
    let mut list = scripted(ListConfig::vertical());
    let ctx = viewport(100, 50);
    let mut builds = 0;

    let result = list
        .layout(
            &ctx,
            &mut Painter::new(),
            MAX_ITEMS_PER_FRAME * 2,
            |_: usize, _: Constraints, _: &mut DrawRecorder| {
                builds += 1;
                Size::ZERO
            },
        )
        .expect("layout");

    assert_eq!(builds, MAX_ITEMS_PER_FRAME);
    assert!(!result.at_end);
    assert_eq!(list.position().offset(), 0);
}

#[test]
fn protocol_misuse_is_reported() {
    let mut list = scripted(ListConfig::vertical());
    let ctx = viewport(100, 50);
    let item = || BuiltItem::new(Size::new(10, 10), DrawRecorder::new().finish());

    list.begin_frame(&ctx, 10).expect("begin frame");
    assert_eq!(list.current_index(), Err(ProtocolError::NoRequest));
    assert_eq!(list.submit_item(item()), Err(ProtocolError::NoRequest));

    assert_eq!(list.request_next(), Ok(IterationDirection::Forward));
    assert_eq!(list.current_index(), Ok(0));
    assert_eq!(list.request_next(), Err(ProtocolError::RequestPending));
    // The outstanding request was dropped with the frame.
    assert_eq!(list.current_index(), Err(ProtocolError::NoRequest));

    list.begin_frame(&ctx, 10).expect("begin frame");
    assert!(list.request_next().expect("request next").is_pending());
    assert_eq!(
        list.finish(&mut Painter::new()).map(|_| ()),
        Err(ProtocolError::UnfinishedItem)
    );

    assert!(list.request_next().expect("request next").is_pending());
    assert_eq!(list.begin_frame(&ctx, 10), Err(ProtocolError::UnfinishedItem));
}

#[test]
fn list_recovers_after_an_abandoned_frame() {
    let mut list = scripted(ListConfig::vertical());
    let ctx = viewport(100, 50);

    list.begin_frame(&ctx, 10).expect("begin frame");
    assert!(list.request_next().expect("request next").is_pending());
    assert!(list.begin_frame(&ctx, 10).is_err());

    let result = list
        .layout(&ctx, &mut Painter::new(), 10, uniform(Size::new(100, 10)))
        .expect("layout after abandoned frame");
    assert_eq!(result.visible_indices().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn minimum_delta_scrolls_to_the_top_and_stops() {
    let mut list = scripted(ListConfig::vertical());
    let ctx = viewport(100, 50);
    list.set_position(Position::new(50, 0));
    list.scroll_by(i32::MIN);

    let result = list
        .layout(&ctx, &mut Painter::new(), 100, uniform(Size::new(100, 10)))
        .expect("layout");

    assert_eq!((list.position().first(), list.position().offset()), (0, 0));
    assert!(result.at_start);
    assert_eq!(result.placed[0].main_offset, 0);
    assert_eq!(list.gesture().stops, 1);
}

#[test]
fn maximum_delta_scrolls_to_the_end_and_stops() {
    let mut list = scripted(ListConfig::vertical());
    let ctx = viewport(100, 50);
    list.gesture_mut().push(i32::MAX);
    list.scroll_by(i32::MAX);

    let result = list
        .layout(&ctx, &mut Painter::new(), 100, uniform(Size::new(100, 10)))
        .expect("layout");

    assert_eq!((list.position().first(), list.position().offset()), (95, 0));
    assert!(result.at_end);
    assert_eq!(result.size.height, 50);
    assert_eq!(list.gesture().stops, 1);
}

#[test]
fn capped_forward_run_still_shows_a_full_viewport() {
    let mut list = scripted(ListConfig::vertical());
    let ctx = viewport(100, 50);
    list.scroll_by(1_000_000_000);

    let result = list
        .layout(&ctx, &mut Painter::new(), 1_000_000, uniform(Size::new(100, 10)))
        .expect("layout");

    let last_built = MAX_ITEMS_PER_FRAME - 1;
    assert_eq!(list.position().first(), last_built - 4);
    assert_eq!(list.position().offset(), 0);
    assert_eq!(
        result.visible_indices().collect::<Vec<_>>(),
        (last_built - 4..=last_built).collect::<Vec<_>>()
    );
    assert_eq!(result.size, Size::new(100, 50));

    // The next frame resumes from there without input.
    let next = list
        .layout(&ctx, &mut Painter::new(), 1_000_000, uniform(Size::new(100, 10)))
        .expect("layout");
    assert_eq!(next, result);
}

#[test]
fn capped_backward_run_still_shows_a_full_viewport() {
    let mut list = scripted(ListConfig::vertical());
    let ctx = viewport(100, 50);
    list.set_position(Position::new(999_999, 0));
    list.scroll_by(i32::MIN);

    let result = list
        .layout(&ctx, &mut Painter::new(), 1_000_000, uniform(Size::new(100, 10)))
        .expect("layout");

    let first = 999_999 - MAX_ITEMS_PER_FRAME;
    assert_eq!((list.position().first(), list.position().offset()), (first, 0));
    assert_eq!(result.placed.len(), 5);
    assert_eq!(result.placed[0].main_offset, 0);
    assert!(!result.at_start);
}

#[test]
fn protocol_errors_describe_themselves() {
    assert_eq!(ProtocolError::UnfinishedItem.to_string(), "unfinished item");
    assert_eq!(ProtocolError::NoRequest.to_string(), "no item was requested");
}
