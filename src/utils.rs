//! Plain-text tables for logging training and evaluation results.
use crate::trainer::EpochReport;

/// Per-epoch accuracy table.
pub fn summary_table(reports: &[EpochReport]) -> String {
    let mut out = String::new();
    out.push_str("+-------+-----------+----------+\n");
    out.push_str("| Epoch |   Right   | Accuracy |\n");
    out.push_str("+-------+-----------+----------+\n");
    for r in reports {
        let right = format!("{}/{}", r.correct, r.total);
        out.push_str(&format!("| {:>5} | {:>9} | {:>8.4} |\n", r.epoch, right, r.accuracy()));
    }
    out.push_str("+-------+-----------+----------+");
    out
}

/// Confusion matrix with true labels down the side and predictions across.
pub fn confusion_table(cm: &[Vec<usize>]) -> String {
    let mut out = String::from("true\\pred");
    for j in 0..cm.len() {
        out.push_str(&format!(" {:>6}", j));
    }
    for (i, row) in cm.iter().enumerate() {
        out.push_str(&format!("\n{:>9}", i));
        for count in row {
            out.push_str(&format!(" {:>6}", count));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_has_one_line_per_epoch() {
        let reports = [
            EpochReport { epoch: 0, correct: 1, total: 4 },
            EpochReport { epoch: 1, correct: 4, total: 4 },
        ];
        let table = summary_table(&reports);
        assert_eq!(table.lines().count(), 6);
        assert!(table.contains("|     1 |       4/4 |   1.0000 |"));
    }

    #[test]
    fn confusion_table_lays_out_rows() {
        let table = confusion_table(&[vec![2, 0], vec![1, 3]]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "        1      1      3");
    }
}
