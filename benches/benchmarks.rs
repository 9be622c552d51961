use outs::analysis::Analyzer;
use outs::analysis::Outs;
use outs::analysis::Standing;
use outs::analysis::Table;
use outs::cards::Hand;
use outs::equity::Backend;
use outs::equity::Enumerator;
use outs::score::Lookup;
use outs::score::Scorer;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        scoring_seven_card_hand,
        decoding_every_category,
        enumerating_turn_outs,
        exhausting_flop_equity,
        analyzing_flop_table,
}

fn scoring_seven_card_hand(c: &mut criterion::Criterion) {
    let hand = Hand::try_from("AsKsQsJs9d2c3h").unwrap_or_default();
    c.bench_function("score a 7-card Hand", |b| b.iter(|| Lookup.score(hand)));
}

fn decoding_every_category(c: &mut criterion::Criterion) {
    c.bench_function("decode every score in range", |b| {
        b.iter(|| {
            (4096u16..40960)
                .map(outs::score::decode)
                .filter(|d| d.is_valid())
                .count()
        })
    });
}

fn enumerating_turn_outs(c: &mut criterion::Criterion) {
    let hands = ["6s6c", "9h8h", "AdKd"];
    let table = Table::parse(&hands, "6h7h7dKc", "").unwrap();
    let scores = table
        .hands()
        .into_iter()
        .map(|hand| Lookup.score(Hand::union(hand, Hand::from(table.board()))))
        .collect::<Vec<_>>();
    let standings = Standing::table(&scores);
    c.bench_function("enumerate Turn outs for 3 players", |b| {
        b.iter(|| {
            Outs::enumerate(
                &Lookup,
                &table.hands(),
                table.board(),
                table.removed(),
                &standings,
            )
        })
    });
}

fn exhausting_flop_equity(c: &mut criterion::Criterion) {
    let table = Table::parse(&["6s6c", "9h8h"], "6h7h7d", "").unwrap();
    c.bench_function("exhaust all Flop runouts for 2 players", |b| {
        b.iter(|| {
            let mut backend = <Enumerator>::default();
            backend.start(table.holes(), Hand::from(table.board()), table.dead(), true);
            backend.wait();
            backend.results().map(|tally| tally.hands)
        })
    });
}

fn analyzing_flop_table(c: &mut criterion::Criterion) {
    let analyzer = <Analyzer>::default();
    c.bench_function("analyze a Flop table end to end", |b| {
        b.iter(|| analyzer.evaluate(&["2h3h", "2c3c", "AhKh", "AdKd"], "4d5s7h", ""))
    });
}
