use criterion::{black_box, criterion_group, criterion_main, Criterion};
use solitaire_table::table::{find_drop_destination, BodyId, Candidate, Probe, TargetKind};
use solitaire_table::{
    CardId, Color, FrameInput, PointerButton, Rank, Rect, SizeTable, StackId, Table, TableConfig,
    Vec2,
};

const CARD: Vec2 = Vec2::new(100.0, 140.0);

/// A mid-game snapshot: seven cascades, four foundations and the pile.
fn snapshot() -> Vec<Candidate> {
    let mut candidates = vec![Candidate {
        body: BodyId::Stack(StackId::Deck),
        bounds: Rect::new(Vec2::new(520.0, 30.0), CARD),
        kind: TargetKind::Other,
    }];
    for k in 0..4u8 {
        let stack = StackId::Foundation(k);
        candidates.push(Candidate {
            body: BodyId::Stack(stack),
            bounds: Rect::new(Vec2::new(910.0 + 130.0 * k as f32, 30.0), CARD),
            kind: TargetKind::Foundation { stack, accepts: k == 3 },
        });
    }

    let mut next = 0;
    for lane in 0..7u8 {
        let stack = StackId::Lane(lane);
        let anchor = Vec2::new(520.0 + 130.0 * lane as f32, 200.0);
        candidates.push(Candidate {
            body: BodyId::Stack(stack),
            bounds: Rect::new(anchor, CARD),
            kind: TargetKind::Lane { stack, empty: false },
        });
        for depth in 0..=lane {
            let top = depth == lane;
            candidates.push(Candidate {
                body: BodyId::Card(CardId::new(next)),
                bounds: Rect::new(anchor + Vec2::new(0.0, 45.0 * depth as f32), CARD),
                kind: TargetKind::Card {
                    lane_top: top.then_some(stack),
                    color: if lane % 2 == 0 { Color::Black } else { Color::Red },
                    rank: Rank::new(13 - depth).unwrap(),
                    face_up: top,
                },
            });
            next += 1;
        }
    }
    candidates
}

fn probe(at: Vec2, multi: bool) -> Probe {
    Probe {
        card: CardId::new(51),
        bounds: Rect::new(at, CARD),
        color: Color::Red,
        rank: Rank::new(7).unwrap(),
        multi,
        run_valid: true,
    }
}

fn bench_resolve_over_cascade(c: &mut Criterion) {
    let candidates = snapshot();
    // Over the top of lane 6, overlapping lane 5 as well.
    let probe = probe(Vec2::new(1250.0, 480.0), false);

    c.bench_function("resolve_over_cascade", |b| {
        b.iter(|| find_drop_destination(black_box(&probe), black_box(&candidates)))
    });
}

fn bench_resolve_miss(c: &mut Criterion) {
    let candidates = snapshot();
    let probe = probe(Vec2::new(40.0, 800.0), true);

    c.bench_function("resolve_miss", |b| {
        b.iter(|| find_drop_destination(black_box(&probe), black_box(&candidates)))
    });
}

fn bench_idle_frame(c: &mut Criterion) {
    let mut table = Table::new(TableConfig::default(), &SizeTable::standard(100.0, 140.0)).unwrap();
    while !table.is_settled() {
        table.update(&FrameInput::idle(1.0 / 60.0, Vec2::ZERO));
    }
    let input = FrameInput::new(1.0 / 60.0, Vec2::new(900.0, 600.0), PointerButton::idle());

    c.bench_function("idle_frame", |b| {
        b.iter(|| {
            table.update(black_box(&input));
            black_box(table.sprites().len())
        })
    });
}

criterion_group!(benches, bench_resolve_over_cascade, bench_resolve_miss, bench_idle_frame);
criterion_main!(benches);
