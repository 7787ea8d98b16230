use std::time::Duration;

use anyhow::{ensure, Context as _};
use vlist_foundation::lazy::{List, ListConfig, ListMeasureResult};
use vlist_foundation::{LayoutContext, PointerEvent};
use vlist_graphics::{Color, DrawRecorder, Metrics, Painter, Rect, Size, Vec2};
use vlist_layout::{Alignment, Constraints};
use web_time::Instant;

const FRAME: Duration = Duration::from_millis(16);

/// Chat-like rows of varying height, narrower rows alternating sides.
fn message_row(index: usize, constraints: Constraints, recorder: &mut DrawRecorder) -> Size {
    let lines = 1 + (index * 7 % 5) as i32;
    let width = constraints.max_width.min(180 + (index * 37 % 120) as i32);
    let size = Size::new(width, 12 + lines * 18);
    let color = if index % 2 == 0 {
        Color::from_rgb_u8(0x3b, 0x82, 0xf6)
    } else {
        Color::from_rgb_u8(0xe5, 0xe7, 0xeb)
    };
    recorder.fill_rect(Rect::from_size(size), color);
    size
}

fn describe(frame: usize, result: &ListMeasureResult, painter: &Painter) {
    let first = result.placed.first().map(|item| item.index);
    let last = result.placed.last().map(|item| item.index);
    log::info!(
        "frame {frame:>3}: items {:?}..={:?} size {}x{} start={} end={} painted={}",
        first,
        last,
        result.size.width,
        result.size.height,
        result.at_start,
        result.at_end,
        painter.painted().len(),
    );
}

struct Demo {
    list: List,
    painter: Painter,
    ctx: LayoutContext,
    frame: usize,
}

impl Demo {
    fn new(config: ListConfig) -> Self {
        let ctx = LayoutContext::new(Constraints::tight(360, 480), Instant::now())
            .with_metrics(Metrics::new(2.0));
        Self {
            list: List::new(config),
            painter: Painter::new(),
            ctx,
            frame: 0,
        }
    }

    fn advance(&mut self, len: usize) -> anyhow::Result<ListMeasureResult> {
        self.ctx.now += FRAME;
        self.frame += 1;
        self.painter.clear();
        let result = self
            .list
            .layout(&self.ctx, &mut self.painter, len, message_row)
            .with_context(|| format!("laying out frame {}", self.frame))?;
        describe(self.frame, &result, &self.painter);
        Ok(result)
    }

    fn pointer(&mut self, event: PointerEvent) {
        let now = self.ctx.now;
        self.list.gesture_mut().on_pointer_event(&event, now);
    }
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("chat list pinned to its end while messages arrive");
    let mut chat = Demo::new(
        ListConfig::vertical()
            .scroll_to_end(true)
            .alignment(Alignment::End),
    );
    let mut len = 3;
    for _ in 0..6 {
        let result = chat.advance(len)?;
        ensure!(result.at_end, "pinned list left its end");
        len += 4;
    }

    log::info!("dragging back through history, then flinging");
    let x = 100.0;
    let mut y = 60.0;
    chat.pointer(PointerEvent::down(Vec2::new(x, y)));
    for _ in 0..5 {
        y += 40.0;
        chat.ctx.now += FRAME;
        chat.pointer(PointerEvent::moved(Vec2::new(x, y)));
        chat.advance(len)?;
    }
    chat.pointer(PointerEvent::up(Vec2::new(x, y)));
    while chat.list.gesture().phase() != vlist_foundation::ScrollPhase::Idle {
        chat.advance(len)?;
    }
    let saved = chat.list.position();
    log::info!("settled at {:?}, pinned={}", saved, chat.list.is_pinned_to_end());

    log::info!("restoring the saved position into a fresh list");
    let mut restored = Demo::new(
        ListConfig::vertical()
            .scroll_to_end(true)
            .alignment(Alignment::End),
    );
    restored.list.set_position(saved);
    let result = restored.advance(len)?;
    ensure!(
        result.first_visible == saved.first(),
        "restored list starts at {} instead of {}",
        result.first_visible,
        saved.first()
    );

    log::info!("wheel scrolling a long horizontal strip");
    let mut strip = Demo::new(ListConfig::horizontal());
    strip.advance(10_000)?;
    for _ in 0..3 {
        strip.pointer(PointerEvent::wheel(Vec2::new(10.0, 10.0), Vec2::new(250.0, 0.0)));
        strip.advance(10_000)?;
    }
    strip.list.scroll_to(9_999);
    let result = strip.advance(10_000)?;
    ensure!(result.at_end, "jump to the last items did not reach the end");

    Ok(())
}
