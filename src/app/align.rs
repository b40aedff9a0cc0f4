use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum AlignMode {
    Left,
    HCenter,
    Right,
    Top,
    VMiddle,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum DistributeMode {
    Horizontal,
    Vertical,
}

/// Computes aligned positions for a snapshot of selected elements. The
/// engine never writes to the document; the caller applies the returned
/// positions. Works for any non-empty input (a single element aligns to
/// itself).
pub(super) fn align_positions(
    items: &[(String, egui::Rect)],
    mode: AlignMode,
) -> Vec<(String, egui::Pos2)> {
    if items.is_empty() {
        return Vec::new();
    }
    let left_most = items.iter().map(|(_, r)| r.min.x).fold(f32::INFINITY, f32::min);
    let right_most = items.iter().map(|(_, r)| r.max.x).fold(f32::NEG_INFINITY, f32::max);
    let top_most = items.iter().map(|(_, r)| r.min.y).fold(f32::INFINITY, f32::min);
    let bottom_most = items.iter().map(|(_, r)| r.max.y).fold(f32::NEG_INFINITY, f32::max);
    let center_x = items.iter().map(|(_, r)| r.center().x).sum::<f32>() / items.len() as f32;
    let center_y = items.iter().map(|(_, r)| r.center().y).sum::<f32>() / items.len() as f32;

    items
        .iter()
        .map(|(id, r)| {
            let pos = match mode {
                AlignMode::Left => egui::pos2(left_most, r.min.y),
                AlignMode::HCenter => egui::pos2(center_x - r.width() / 2.0, r.min.y),
                AlignMode::Right => egui::pos2(right_most - r.width(), r.min.y),
                AlignMode::Top => egui::pos2(r.min.x, top_most),
                AlignMode::VMiddle => egui::pos2(r.min.x, center_y - r.height() / 2.0),
                AlignMode::Bottom => egui::pos2(r.min.x, bottom_most - r.height()),
            };
            (id.clone(), pos)
        })
        .collect()
}

/// Redistributes the left/top edges of the selection evenly between the
/// extremes. This intentionally spaces edge positions, not the visual
/// gaps between elements of differing size. Fewer than three elements
/// yields no moves.
pub(super) fn distribute_positions(
    items: &[(String, egui::Rect)],
    mode: DistributeMode,
) -> Vec<(String, egui::Pos2)> {
    if items.len() < 3 {
        return Vec::new();
    }
    let mut sorted: Vec<(String, egui::Rect)> = items.to_vec();
    match mode {
        DistributeMode::Horizontal => {
            sorted.sort_by(|a, b| a.1.min.x.total_cmp(&b.1.min.x));
            let first = sorted.first().map(|(_, r)| r.min.x).unwrap_or(0.0);
            let last = sorted.last().map(|(_, r)| r.min.x).unwrap_or(0.0);
            let spacing = (last - first) / ((sorted.len() - 1) as f32);
            sorted
                .into_iter()
                .enumerate()
                .map(|(rank, (id, r))| {
                    (id, egui::pos2(first + spacing * rank as f32, r.min.y))
                })
                .collect()
        }
        DistributeMode::Vertical => {
            sorted.sort_by(|a, b| a.1.min.y.total_cmp(&b.1.min.y));
            let first = sorted.first().map(|(_, r)| r.min.y).unwrap_or(0.0);
            let last = sorted.last().map(|(_, r)| r.min.y).unwrap_or(0.0);
            let spacing = (last - first) / ((sorted.len() - 1) as f32);
            sorted
                .into_iter()
                .enumerate()
                .map(|(rank, (id, r))| {
                    (id, egui::pos2(r.min.x, first + spacing * rank as f32))
                })
                .collect()
        }
    }
}
