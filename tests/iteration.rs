mod resource {
    pub mod descriptors;
    pub mod logs;
}

#[cfg(test)]
mod tests {
    use crate::resource::{
        descriptors::{UsersTable, users_table},
        logs::init_logs,
    };
    use rowshape::{
        Direction, Element, ElementInfo, ElementKind, Sequence, Shape, TypeTag, TypeVisitor,
        Visitor,
    };
    use std::{
        any::{self, Any},
        ops::ControlFlow,
    };

    #[derive(Default)]
    struct Recorder {
        visits: Vec<(usize, &'static str)>,
        stop_at: Option<usize>,
    }

    impl Visitor for Recorder {
        fn visit<T: Element>(&mut self, index: usize, value: &T) -> ControlFlow<()> {
            self.visits.push((index, value.type_name()));
            if self.stop_at == Some(index) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        }
    }

    fn row() -> (i32, String, f64, bool) {
        (1, "two".into(), 3.0, true)
    }

    fn positions(recorder: &Recorder) -> Vec<usize> {
        recorder.visits.iter().map(|(i, _)| *i).collect()
    }

    #[test]
    fn forward_and_reverse_order() {
        init_logs();
        let row = row();

        let mut recorder = Recorder::default();
        let flow = row.for_each(&mut recorder, Direction::Forward);
        assert_eq!(flow, ControlFlow::Continue(()));
        assert_eq!(positions(&recorder), [0, 1, 2, 3]);
        assert_eq!(
            recorder.visits.iter().map(|(_, v)| *v).collect::<Vec<_>>(),
            [
                any::type_name::<i32>(),
                any::type_name::<String>(),
                any::type_name::<f64>(),
                any::type_name::<bool>(),
            ]
        );

        let mut recorder = Recorder::default();
        let flow = row.for_each(&mut recorder, Direction::Reverse);
        assert_eq!(flow, ControlFlow::Continue(()));
        assert_eq!(positions(&recorder), [3, 2, 1, 0]);
    }

    #[test]
    fn early_stop_skips_the_rest() {
        init_logs();
        let row = row();

        let mut recorder = Recorder {
            stop_at: Some(2),
            ..Default::default()
        };
        let flow = row.for_each(&mut recorder, Direction::Forward);
        assert_eq!(flow, ControlFlow::Break(()));
        assert_eq!(positions(&recorder), [0, 1, 2]);

        let mut recorder = Recorder {
            stop_at: Some(2),
            ..Default::default()
        };
        let flow = row.for_each(&mut recorder, Direction::Reverse);
        assert_eq!(flow, ControlFlow::Break(()));
        assert_eq!(positions(&recorder), [3, 2]);

        let mut visited = Vec::new();
        let flow = row.for_each_dyn(Direction::Forward, |i, _| {
            visited.push(i);
            if i == 0 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(flow, ControlFlow::Break(()));
        assert_eq!(visited, [0]);
    }

    #[test]
    fn empty_sequence_visits_nothing() {
        init_logs();
        let mut recorder = Recorder::default();
        assert_eq!(
            ().for_each(&mut recorder, Direction::Forward),
            ControlFlow::Continue(())
        );
        assert_eq!(
            ().for_each(&mut recorder, Direction::Reverse),
            ControlFlow::Continue(())
        );
        assert!(recorder.visits.is_empty());

        let mut visited = 0;
        ().iterate(|_, _| visited += 1);
        <() as Shape>::for_each_type_info(|_, _| visited += 1);
        assert_eq!(visited, 0);
    }

    #[test]
    fn visitor_reads_values() {
        init_logs();
        struct Sum(f64);
        impl Visitor for Sum {
            fn visit<T: Element>(&mut self, _index: usize, value: &T) -> ControlFlow<()> {
                let value = value as &dyn Any;
                if let Some(v) = value.downcast_ref::<i32>() {
                    self.0 += *v as f64;
                } else if let Some(v) = value.downcast_ref::<f64>() {
                    self.0 += v;
                }
                ControlFlow::Continue(())
            }
        }
        let mut sum = Sum(0.0);
        let _ = row().for_each(&mut sum, Direction::default());
        assert_eq!(sum.0, 4.0);

        let mut text = String::new();
        row().iterate(|_, v| {
            if let Some(v) = v.downcast_ref::<String>() {
                text.push_str(v);
            }
        });
        assert_eq!(text, "two");
    }

    #[test]
    fn type_iteration_is_ascending() {
        init_logs();
        struct Names(Vec<(usize, &'static str)>);
        impl TypeVisitor for Names {
            fn visit<T: Element>(&mut self, index: usize, _tag: TypeTag<T>) {
                self.0.push((index, any::type_name::<T>()));
            }
        }
        let mut names = Names(Vec::new());
        <(i32, String, f64, bool)>::for_each_type(&mut names);
        assert_eq!(
            names.0,
            [
                (0, any::type_name::<i32>()),
                (1, any::type_name::<String>()),
                (2, any::type_name::<f64>()),
                (3, any::type_name::<bool>()),
            ]
        );

        let mut kinds = Vec::new();
        UsersTable::for_each_type_info(|i, info: ElementInfo| kinds.push((i, info.kind)));
        assert_eq!(
            kinds,
            [
                (0, ElementKind::Column),
                (1, ElementKind::Column),
                (2, ElementKind::PrimaryKey),
                (3, ElementKind::Column),
                (4, ElementKind::Unique),
            ]
        );
    }

    /// Value iteration defaults to reverse order, type iteration and `iterate` are ascending.
    /// If this fails the two defaults were unified.
    #[test]
    fn value_and_type_iteration_default_orders_differ() {
        init_logs();
        assert_eq!(Direction::default(), Direction::Reverse);

        let table = users_table();
        let mut by_default = Recorder::default();
        let _ = table.for_each(&mut by_default, Direction::default());
        assert_eq!(positions(&by_default), [4, 3, 2, 1, 0]);

        let mut by_iterate = Vec::new();
        table.iterate(|i, _| by_iterate.push(i));
        assert_eq!(by_iterate, [0, 1, 2, 3, 4]);

        let mut by_type = Vec::new();
        UsersTable::for_each_type_info(|i, _| by_type.push(i));
        assert_eq!(by_type, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn element_access_by_index() {
        init_logs();
        let row = row();
        assert_eq!(row.element(0).unwrap().downcast_ref::<i32>(), Some(&1));
        assert!(row.element(1).unwrap().is::<String>());
        assert_eq!(row.element(3).unwrap().info(), ElementInfo::of::<bool>());
        assert!(row.element(4).is_none());
        assert!(().element(0).is_none());
    }
}
