use crate::core::calculator::duration::DurationResult;
use crate::models::emotion::Emotion;
use crate::models::trade::Trade;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PnlStats {
    pub total_trades: usize,
    pub open_trades: usize,
    pub closed_trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub breakeven: usize,
    pub win_rate: f64,
    pub total_pnl: f64,
    pub avg_win: f64,
    pub avg_loss: f64,
    pub largest_win: f64,
    pub largest_loss: f64,
    pub profit_factor: f64,
    pub avg_duration: DurationResult,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmotionStats {
    pub trades: usize,
    pub wins: usize,
    pub total_pnl: f64,
}

impl EmotionStats {
    pub fn win_rate(&self) -> f64 {
        if self.trades > 0 {
            self.wins as f64 / self.trades as f64
        } else {
            0.0
        }
    }
}

impl PnlStats {
    /// Aggregate realised P&L. Open trades are counted but do not contribute
    /// to any P&L figure.
    pub fn compute(trades: &[Trade]) -> Self {
        let mut s = PnlStats {
            total_trades: trades.len(),
            ..Default::default()
        };

        let mut total_wins = 0.0_f64;
        let mut total_losses = 0.0_f64;
        let mut duration_sum = 0u64;
        let mut duration_count = 0u64;

        for trade in trades {
            if let DurationResult::Minutes(m) = trade.duration() {
                duration_sum += m as u64;
                duration_count += 1;
            }

            let Some(pnl) = trade.pnl() else {
                s.open_trades += 1;
                continue;
            };

            s.closed_trades += 1;
            s.total_pnl += pnl;

            if pnl > 0.0 {
                s.wins += 1;
                total_wins += pnl;
                s.largest_win = s.largest_win.max(pnl);
            } else if pnl < 0.0 {
                s.losses += 1;
                total_losses += pnl.abs();
                s.largest_loss = s.largest_loss.max(pnl.abs());
            } else {
                s.breakeven += 1;
            }
        }

        if s.closed_trades > 0 {
            s.win_rate = s.wins as f64 / s.closed_trades as f64;
        }
        if s.wins > 0 {
            s.avg_win = total_wins / s.wins as f64;
        }
        if s.losses > 0 {
            s.avg_loss = total_losses / s.losses as f64;
        }

        s.profit_factor = if total_losses > 0.0 {
            total_wins / total_losses
        } else if total_wins > 0.0 {
            f64::INFINITY
        } else {
            0.0
        };

        if duration_count > 0 {
            s.avg_duration = DurationResult::Minutes((duration_sum / duration_count) as u32);
        }

        s
    }
}

/// Per-tag breakdown over closed trades. A trade with several tags counts
/// once under each of them.
pub fn by_emotion(trades: &[Trade]) -> BTreeMap<Emotion, EmotionStats> {
    let mut out: BTreeMap<Emotion, EmotionStats> = BTreeMap::new();

    for trade in trades {
        let Some(pnl) = trade.pnl() else { continue };
        for emotion in &trade.emotions {
            let entry = out.entry(*emotion).or_default();
            entry.trades += 1;
            entry.total_pnl += pnl;
            if pnl > 0.0 {
                entry.wins += 1;
            }
        }
    }

    out
}
