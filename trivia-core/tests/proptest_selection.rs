use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use trivia_core::{
    paginate, CategoryId, Pagination, Question, QuestionId, QuizCategory, QuizOutcome,
    QuizRequest, QUESTIONS_PER_PAGE,
};

fn arb_bank() -> impl Strategy<Value = Vec<Question>> {
    prop::collection::vec((1..=6i32, 1..=5i32), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (category, difficulty))| Question {
                id: QuestionId(i as i32 + 1),
                question: format!("question {}", i),
                answer: format!("answer {}", i),
                category: CategoryId(category),
                difficulty,
            })
            .collect()
    })
}

proptest! {
    /// Property: every in-range page has min(10, total - (p-1)*10) items
    #[test]
    fn prop_page_length(total in 0usize..120, page in 1u32..16) {
        let items: Vec<usize> = (0..total).collect();
        let per_page = QUESTIONS_PER_PAGE as usize;
        let pages = total.div_ceil(per_page);

        match paginate(&items, Pagination::new(page)).non_empty() {
            Ok(p) => {
                prop_assert!((page as usize) <= pages);
                let expected = per_page.min(total - (page as usize - 1) * per_page);
                prop_assert_eq!(p.items.len(), expected);
                prop_assert_eq!(p.total, total as i64);
            }
            Err(_) => prop_assert!((page as usize) > pages),
        }
    }

    /// Property: pages are contiguous and cover the source in order
    #[test]
    fn prop_pages_cover_source(total in 1usize..100) {
        let items: Vec<usize> = (0..total).collect();
        let mut collected = Vec::new();
        let mut page = 1;
        while let Ok(p) = paginate(&items, Pagination::new(page)).non_empty() {
            collected.extend(p.items);
            page += 1;
        }
        prop_assert_eq!(collected, items);
    }

    /// Property: the pick is never a previous question and always in the category
    #[test]
    fn prop_quiz_pick_is_unseen(
        bank in arb_bank(),
        category in 0..=7i32,
        seen_mask in prop::collection::vec(any::<bool>(), 40),
        seed in any::<u64>(),
    ) {
        let previous: Vec<QuestionId> = bank
            .iter()
            .zip(&seen_mask)
            .filter(|(_, seen)| **seen)
            .map(|(q, _)| q.id)
            .collect();
        let request = QuizRequest {
            previous_questions: previous.clone(),
            quiz_category: Some(QuizCategory { id: CategoryId(category) }),
        };
        let in_category = |q: &Question| category == 0 || q.category == CategoryId(category);
        let candidates = bank.iter().filter(|q| in_category(q)).count();
        let unseen = bank
            .iter()
            .filter(|q| in_category(q) && !previous.contains(&q.id))
            .count();

        match request.select(bank.clone(), &mut StdRng::seed_from_u64(seed)) {
            Ok(QuizOutcome::Next(q)) => {
                prop_assert!(!previous.contains(&q.id));
                prop_assert!(in_category(&q));
                prop_assert!(unseen > 0);
            }
            Ok(QuizOutcome::Exhausted) => {
                prop_assert!(candidates > 0);
                prop_assert_eq!(unseen, 0);
            }
            Err(_) => prop_assert_eq!(candidates, 0),
        }
    }
}
