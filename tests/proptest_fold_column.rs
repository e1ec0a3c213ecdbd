//! Property tests for the fold-aware column.
//!
//! Sizes and positions are whole pixels so that float sums are exact.

use foldkit::prelude::*;
use proptest::prelude::*;

struct Block(Size);

impl SubView for Block {
    fn size_that_fits(&self, _proposal: ProposalSize) -> Size {
        self.0
    }
}

fn blocks(sizes: &[(u16, u16)]) -> Vec<Box<dyn SubView>> {
    sizes
        .iter()
        .map(|&(w, h)| Box::new(Block(Size::new(f32::from(w), f32::from(h)))) as Box<dyn SubView>)
        .collect()
}

fn hinge(top: u16, height: u16, separating: bool) -> DisplayFeature {
    let top = f32::from(top);
    FoldingFeature::new(
        Rect::from_ltrb(0.0, top, 2000.0, top + f32::from(height)),
        FoldOrientation::Horizontal,
        separating,
    )
    .into()
}

fn child_sizes() -> impl Strategy<Value = Vec<(u16, u16)>> {
    prop::collection::vec((1u16..400, 0u16..300), 0..12)
}

fn plain_offsets(sizes: &[(u16, u16)]) -> Vec<Point> {
    let mut y = 0.0;
    sizes
        .iter()
        .map(|&(_, h)| {
            let offset = Point::new(0.0, y);
            y += f32::from(h);
            offset
        })
        .collect()
}

fn run(features: Vec<DisplayFeature>, sizes: &[(u16, u16)], origin_y: u16) -> ColumnLayout {
    let host = FixedHost::new(features)
        .with_window_position(Some(Point::new(0.0, f32::from(origin_y))));
    FoldAwareColumn::from_host(&host, blocks(sizes))
        .layout(&host, ProposalSize::UNSPECIFIED)
        .expect("window position is set")
}

proptest! {
    /// Property: without a horizontal fold the column is a plain stack
    #[test]
    fn no_fold_is_plain_stack(sizes in child_sizes(), origin_y in 0u16..2000) {
        let vertical = FoldingFeature::new(
            Rect::from_ltrb(500.0, 0.0, 520.0, 2000.0),
            FoldOrientation::Vertical,
            true,
        );
        let layout = run(vec![vertical.into()], &sizes, origin_y);

        let total: f32 = sizes.iter().map(|&(_, h)| f32::from(h)).sum();
        prop_assert_eq!(layout.height, total);
        prop_assert_eq!(layout.offsets, plain_offsets(&sizes));
    }

    /// Property: width is the widest child, or zero
    #[test]
    fn width_is_widest_child(sizes in child_sizes(), top in 0u16..1500, separating in any::<bool>()) {
        let layout = run(vec![hinge(top, 20, separating)], &sizes, 0);

        let widest = sizes.iter().map(|&(w, _)| f32::from(w)).fold(0.0, f32::max);
        prop_assert_eq!(layout.width, widest);
    }

    /// Property: fold height is always reserved
    #[test]
    fn fold_height_is_reserved(
        sizes in child_sizes(),
        top in 0u16..1500,
        fold_height in 0u16..80,
        separating in any::<bool>(),
        origin_y in 0u16..1500,
    ) {
        let layout = run(vec![hinge(top, fold_height, separating)], &sizes, origin_y);

        let total: f32 = sizes.iter().map(|&(_, h)| f32::from(h)).sum();
        prop_assert_eq!(layout.height, total + f32::from(fold_height));
    }

    /// Property: a non-separating fold never moves children
    #[test]
    fn non_separating_fold_is_inert(sizes in child_sizes(), top in 0u16..1500, origin_y in 0u16..1500) {
        let layout = run(vec![hinge(top, 30, false)], &sizes, origin_y);

        prop_assert_eq!(layout.offsets, plain_offsets(&sizes));
    }

    /// Property: no child straddles a separating fold, and order is kept
    #[test]
    fn children_avoid_separating_fold(
        sizes in child_sizes(),
        top in 0u16..1500,
        fold_height in 1u16..80,
        origin_y in 0u16..1500,
    ) {
        let layout = run(vec![hinge(top, fold_height, true)], &sizes, origin_y);
        let fold_top = f32::from(top);
        let fold_bottom = fold_top + f32::from(fold_height);

        let mut previous_bottom = 0.0;
        for (offset, &(w, h)) in layout.offsets.iter().zip(&sizes) {
            prop_assert_eq!(offset.x, 0.0);
            prop_assert!(offset.y >= previous_bottom);

            let frame = Rect::new(*offset, Size::new(f32::from(w), f32::from(h)))
                .translate(0.0, f32::from(origin_y));
            let fold = Rect::from_ltrb(0.0, fold_top, 2000.0, fold_bottom);
            prop_assert!(!frame.overlaps(&fold), "child {:?} overlaps fold {:?}", frame, fold);

            previous_bottom = offset.y + f32::from(h);
        }
    }

    /// Property: the same inputs give the same layout
    #[test]
    fn layout_is_idempotent(sizes in child_sizes(), top in 0u16..1500, origin_y in 0u16..1500) {
        let features = vec![hinge(top, 24, true)];

        let first = run(features.clone(), &sizes, origin_y);
        let second = run(features, &sizes, origin_y);

        prop_assert_eq!(first, second);
    }
}
