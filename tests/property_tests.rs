use figure_rects::{Canvas, Figure, Rect, decompose};
use proptest::prelude::*;

/// Split `root` along the guillotine `cuts`, never leaving a piece narrower
/// or shorter than `min_span` cells, border included.
fn guillotine(root: Rect, cuts: &[(bool, u8)], min_span: usize) -> Vec<Rect> {
    let mut pieces = vec![root];
    for (i, &(vertical, at)) in cuts.iter().enumerate() {
        let idx = i % pieces.len();
        let piece = pieces[idx];
        let span = if vertical { piece.width } else { piece.height };
        if span < 2 * min_span - 1 {
            continue;
        }
        // Offset of the shared edge, leaving both halves at least `min_span`.
        let offset = (min_span - 1) + (at as usize) % (span + 2 - 2 * min_span);
        let (first, second) = if vertical {
            (
                Rect::new(piece.x, piece.y, offset + 1, piece.height),
                Rect::new(piece.x + offset, piece.y, piece.width - offset, piece.height),
            )
        } else {
            (
                Rect::new(piece.x, piece.y, piece.width, offset + 1),
                Rect::new(piece.x, piece.y + offset, piece.width, piece.height - offset),
            )
        };
        pieces[idx] = first;
        pieces.push(second);
    }
    pieces
}

fn sorted(mut rects: Vec<Rect>) -> Vec<Rect> {
    rects.sort();
    rects
}

fn encloses(outer: &Rect, inner: &Rect) -> bool {
    outer.contains(inner.y, inner.x) && outer.contains(inner.bottom() - 1, inner.right() - 1)
}

proptest! {
    #[test]
    fn single_rectangle_is_recovered(width in 2usize..40, height in 2usize..20) {
        let input = Canvas::from_rects([Rect::new(0, 0, width, height)]).render();
        prop_assert_eq!(decompose(&input).unwrap(), vec![Rect::new(0, 0, width, height)]);
    }

    #[test]
    fn shared_edge_pair_is_recovered(
        left_w in 3usize..20,
        right_w in 3usize..20,
        height in 3usize..12,
        vertical in any::<bool>(),
    ) {
        let (a, b) = if vertical {
            (Rect::new(0, 0, left_w, height), Rect::new(left_w - 1, 0, right_w, height))
        } else {
            (Rect::new(0, 0, height, left_w), Rect::new(0, left_w - 1, height, right_w))
        };
        let input = Canvas::from_rects([a, b]).render();
        prop_assert_eq!(sorted(decompose(&input).unwrap()), sorted(vec![a, b]));
    }

    #[test]
    fn guillotine_packings_are_recovered(
        width in 3usize..48,
        height in 3usize..24,
        cuts in prop::collection::vec((any::<bool>(), any::<u8>()), 0..12),
    ) {
        // Pieces at least 3×3 leave no 2-cell strip for a stray `++` to split.
        let expected = guillotine(Rect::new(0, 0, width, height), &cuts, 3);
        let input = Canvas::from_rects(expected.clone()).render();
        let figure = Figure::parse(&input).unwrap();

        let found: Vec<Rect> = figure.rectangles().collect();
        prop_assert_eq!(sorted(found.clone()), sorted(expected));

        // Interiors plus boundary cells tile the whole figure.
        let interior: usize = found.iter().map(Rect::interior_area).sum();
        prop_assert_eq!(interior + figure.boundary_count(), width * height);

        // Sweeping again gives the same rectangles.
        prop_assert_eq!(figure.rectangles().collect::<Vec<_>>(), found.clone());

        // Redrawing the decomposition reproduces the figure.
        prop_assert_eq!(Canvas::from_rects(found).render(), input);
    }

    #[test]
    fn thin_guillotine_packings_split_into_their_pieces(
        width in 2usize..48,
        height in 2usize..24,
        cuts in prop::collection::vec((any::<bool>(), any::<u8>()), 0..16),
    ) {
        let pieces = guillotine(Rect::new(0, 0, width, height), &cuts, 2);
        let input = Canvas::from_rects(pieces.clone()).render();
        let figure = Figure::parse(&input).unwrap();
        let found: Vec<Rect> = figure.rectangles().collect();

        // Stacked `++` pairs read as zero-length edges, so a 2-wide or
        // 2-tall piece may come back split, but never merged with a neighbour.
        for rect in &found {
            prop_assert!(pieces.iter().any(|piece| encloses(piece, rect)), "stray {:?}", rect);
        }
        for piece in &pieces {
            let parts: Vec<&Rect> = found.iter().filter(|rect| encloses(piece, rect)).collect();
            for row in piece.y..piece.bottom() {
                for col in piece.x..piece.right() {
                    prop_assert!(
                        parts.iter().any(|rect| rect.contains(row, col)),
                        "{:?} leaves ({}, {}) uncovered", piece, row, col
                    );
                }
            }
        }

        // A cell is drawn exactly when it lies on some rectangle's border.
        for row in 0..height {
            for col in 0..width {
                let drawn = figure.cell(row, col).is_some_and(|cell| cell.is_boundary());
                let bordered = found.iter().any(|rect| rect.on_border(row, col));
                prop_assert_eq!(drawn, bordered, "cell ({}, {})", row, col);
            }
        }

        let interior: usize = found.iter().map(Rect::interior_area).sum();
        prop_assert_eq!(interior + figure.boundary_count(), width * height);
        prop_assert_eq!(Canvas::from_rects(found).render(), input);
    }
}
