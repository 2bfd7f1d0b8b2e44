use error_stack::Report;
use kernel::interface::state::{DependOnCatalog, DependOnLateFeePolicy, DependOnTransactionLog};
use kernel::prelude::entity::{BookStatus, HolderName, IssuedAt, ReturnedOn, Transaction};
use kernel::{IssuedTo, KernelError};

use crate::service::parse_book_id;
use crate::transfer::{IssueBookDto, ReturnBookDto, ReturnedBookDto, TransactionDto};

pub trait IssueBookService: DependOnCatalog + DependOnTransactionLog {
    fn issue_book(&mut self, dto: IssueBookDto) -> error_stack::Result<TransactionDto, KernelError> {
        let id = parse_book_id(&dto.book_id)?;
        let book = self.catalog().get(&id)?;
        if let BookStatus::Issued { holder, issued_at } = book.status() {
            return Err(
                Report::new(KernelError::AlreadyIssued).attach_printable(IssuedTo {
                    holder: holder.clone(),
                    issued_at: *issued_at,
                }),
            );
        }
        let holder = HolderName::validated(&dto.holder_name)?;
        let title = book.title().clone();
        let issued_at = IssuedAt::new(dto.issued_at);

        self.catalog_mut().set_issued(&id, holder.clone(), issued_at)?;
        let transaction = Transaction::issued(id, title, holder, issued_at);
        self.transaction_log_mut().append(transaction.clone());
        tracing::info!(%id, member = %transaction.member_name(), "Book issued");

        Ok(TransactionDto::from(transaction))
    }
}

impl<T> IssueBookService for T where T: DependOnCatalog + DependOnTransactionLog {}

pub trait ReturnBookService: DependOnCatalog + DependOnTransactionLog + DependOnLateFeePolicy {
    fn return_book(
        &mut self,
        dto: ReturnBookDto,
    ) -> error_stack::Result<ReturnedBookDto, KernelError> {
        let id = parse_book_id(&dto.book_id)?;
        let book = self.catalog().get(&id)?;
        let (holder, issued_at) = match book.status() {
            BookStatus::Available => {
                return Err(Report::new(KernelError::NotIssued)
                    .attach_printable(format!("Book {id} is not on loan")));
            }
            BookStatus::Issued { holder, issued_at } => (holder.clone(), *issued_at),
        };
        let return_date = ReturnedOn::parse(&dto.return_date)?;
        let title = book.title().clone();

        let policy = self.late_fee_policy();
        let overdue_days = policy.overdue_days(issued_at.date(), *return_date.as_ref());
        let late_fee = policy.fee_for(overdue_days);

        self.catalog_mut().set_available(&id)?;
        let transaction =
            Transaction::returned(id, title, holder, issued_at, return_date, late_fee);
        self.transaction_log_mut().append(transaction.clone());
        tracing::info!(%id, overdue_days, %late_fee, "Book returned");

        Ok(ReturnedBookDto {
            transaction: TransactionDto::from(transaction),
            overdue_days,
        })
    }
}

impl<T> ReturnBookService for T where
    T: DependOnCatalog + DependOnTransactionLog + DependOnLateFeePolicy
{
}

pub trait HistoryService: DependOnTransactionLog {
    fn history(&self) -> Vec<TransactionDto> {
        self.transaction_log()
            .entries()
            .iter()
            .cloned()
            .map(TransactionDto::from)
            .collect()
    }
}

impl<T> HistoryService for T where T: DependOnTransactionLog {}

#[cfg(test)]
mod test {
    use kernel::{IssuedTo, KernelError};
    use time::macros::datetime;
    use time::PrimitiveDateTime;

    use crate::service::test::TestModule;
    use crate::service::{
        GetBookService, HistoryService, IssueBookService, LoadCatalogService, ReturnBookService,
    };
    use crate::transfer::{GetBookDto, IssueBookDto, ReturnBookDto};

    const ISSUED_AT: PrimitiveDateTime = datetime!(2024-01-01 10:00:00);

    fn loaded() -> error_stack::Result<(tempfile::TempDir, TestModule), KernelError> {
        let (dir, mut module) = TestModule::with_lines(&["Dune", "Emma", "Ulysses"])?;
        module.load_catalog()?;
        Ok((dir, module))
    }

    fn issue(book_id: &str, holder: &str) -> IssueBookDto {
        IssueBookDto {
            book_id: book_id.to_string(),
            holder_name: holder.to_string(),
            issued_at: ISSUED_AT,
        }
    }

    fn give_back(book_id: &str, date: &str) -> ReturnBookDto {
        ReturnBookDto {
            book_id: book_id.to_string(),
            return_date: date.to_string(),
        }
    }

    #[test]
    fn issue_marks_book_and_records_transaction() -> error_stack::Result<(), KernelError> {
        let (_dir, mut module) = loaded()?;

        let transaction = module.issue_book(issue("101", "Alice"))?;
        assert_eq!(transaction.kind, "Issue");
        assert_eq!(transaction.book_title, "Dune");
        assert_eq!(transaction.member_name, "Alice");
        assert_eq!(transaction.issue_date, "2024-01-01 10:00:00");
        assert_eq!(transaction.return_date, None);
        assert_eq!(transaction.late_fee, 0);

        let book = module.get_book(GetBookDto { id: "101".into() })?;
        assert_eq!(book.status, "Already Issued");
        assert_eq!(book.holder_name.as_deref(), Some("Alice"));
        assert_eq!(book.issued_at.as_deref(), Some("2024-01-01 10:00:00"));
        assert_eq!(module.history(), vec![transaction]);
        Ok(())
    }

    #[test]
    fn issuing_twice_is_rejected_without_side_effects() -> error_stack::Result<(), KernelError> {
        let (_dir, mut module) = loaded()?;
        module.issue_book(issue("101", "Alice"))?;
        let before = module.get_book(GetBookDto { id: "101".into() })?;

        let error = module.issue_book(issue("101", "Bob")).unwrap_err();
        assert_eq!(error.current_context(), &KernelError::AlreadyIssued);
        let issued_to = error.downcast_ref::<IssuedTo>().unwrap();
        assert_eq!(issued_to.holder.as_ref(), "Alice");
        assert_eq!(
            issued_to.to_string(),
            "This book is already issued to Alice on 2024-01-01 10:00:00"
        );

        assert_eq!(module.get_book(GetBookDto { id: "101".into() })?, before);
        assert_eq!(module.history().len(), 1);
        Ok(())
    }

    #[test]
    fn issue_requires_known_book_and_holder() -> error_stack::Result<(), KernelError> {
        let (_dir, mut module) = loaded()?;

        let error = module.issue_book(issue("404", "Alice")).unwrap_err();
        assert_eq!(error.current_context(), &KernelError::NotFound);

        let error = module.issue_book(issue("101", "   ")).unwrap_err();
        assert_eq!(error.current_context(), &KernelError::Validation);
        assert_eq!(
            module.get_book(GetBookDto { id: "101".into() })?.status,
            "Available"
        );
        assert!(module.history().is_empty());
        Ok(())
    }

    #[test]
    fn return_within_loan_window_is_free() -> error_stack::Result<(), KernelError> {
        let (_dir, mut module) = loaded()?;
        module.issue_book(issue("101", "Alice"))?;

        let returned = module.return_book(give_back("101", "2024-01-15"))?;
        assert_eq!(returned.overdue_days, 0);
        assert_eq!(returned.transaction.kind, "Return");
        assert_eq!(returned.transaction.member_name, "Alice");
        assert_eq!(returned.transaction.issue_date, "2024-01-01 10:00:00");
        assert_eq!(returned.transaction.return_date.as_deref(), Some("2024-01-15"));
        assert_eq!(returned.transaction.late_fee, 0);

        let book = module.get_book(GetBookDto { id: "101".into() })?;
        assert_eq!(book.status, "Available");
        assert_eq!(book.holder_name, None);
        assert_eq!(book.issued_at, None);
        Ok(())
    }

    #[test]
    fn late_fee_per_overdue_day_then_capped() -> error_stack::Result<(), KernelError> {
        let (_dir, mut module) = loaded()?;
        let cases = [
            ("101", "2024-01-05", -10, 0),
            ("102", "2024-01-18", 3, 150),
            ("103", "2024-02-04", 20, 500),
        ];
        for (id, _, _, _) in cases {
            module.issue_book(issue(id, "Alice"))?;
        }
        for (id, date, overdue_days, fee) in cases {
            let returned = module.return_book(give_back(id, date))?;
            assert_eq!(returned.overdue_days, overdue_days, "{id}");
            assert_eq!(returned.transaction.late_fee, fee, "{id}");
        }
        Ok(())
    }

    #[test]
    fn late_evening_issue_counts_calendar_days() -> error_stack::Result<(), KernelError> {
        let (_dir, mut module) = loaded()?;
        module.issue_book(IssueBookDto {
            book_id: "101".into(),
            holder_name: "Alice".into(),
            issued_at: datetime!(2024-01-01 23:00:00),
        })?;
        let returned = module.return_book(give_back("101", "2024-01-16"))?;
        assert_eq!(returned.overdue_days, 1);
        assert_eq!(returned.transaction.late_fee, 50);
        Ok(())
    }

    #[test]
    fn return_failures_do_not_mutate() -> error_stack::Result<(), KernelError> {
        let (_dir, mut module) = loaded()?;

        let error = module.return_book(give_back("101", "2024-01-15")).unwrap_err();
        assert_eq!(error.current_context(), &KernelError::NotIssued);

        let error = module.return_book(give_back("999", "2024-01-15")).unwrap_err();
        assert_eq!(error.current_context(), &KernelError::NotFound);

        module.issue_book(issue("101", "Alice"))?;
        let error = module.return_book(give_back("101", "15/01/2024")).unwrap_err();
        assert_eq!(error.current_context(), &KernelError::InvalidDate);
        let book = module.get_book(GetBookDto { id: "101".into() })?;
        assert_eq!(book.status, "Already Issued");
        assert_eq!(module.history().len(), 1);
        Ok(())
    }

    #[test]
    fn history_follows_successful_calls_in_order() -> error_stack::Result<(), KernelError> {
        let (_dir, mut module) = loaded()?;

        module.issue_book(issue("101", "Alice"))?;
        module.issue_book(issue("102", "Bob"))?;
        let _ = module.issue_book(issue("101", "Carol"));
        module.return_book(give_back("102", "2024-01-10"))?;
        let _ = module.return_book(give_back("103", "2024-01-10"));
        module.return_book(give_back("101", "2024-01-20"))?;
        module.issue_book(issue("101", "Carol"))?;

        let summary = module
            .history()
            .into_iter()
            .map(|transaction| (transaction.kind, transaction.book_id, transaction.member_name))
            .collect::<Vec<_>>();
        assert_eq!(
            summary,
            vec![
                ("Issue".to_string(), 101, "Alice".to_string()),
                ("Issue".to_string(), 102, "Bob".to_string()),
                ("Return".to_string(), 102, "Bob".to_string()),
                ("Return".to_string(), 101, "Alice".to_string()),
                ("Issue".to_string(), 101, "Carol".to_string()),
            ]
        );
        Ok(())
    }
}
