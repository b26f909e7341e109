use clap::Subcommand;

/// Read-only analytical queries.
#[derive(Clone, Debug, Subcommand)]
pub enum QueryCommands {
    /// Five students with the highest average grade.
    TopPerformers,
    /// Student with the highest average in a subject.
    BestInSubject {
        #[arg(long)]
        subject_id: i64,
    },
    /// Average grade per group in a subject.
    GroupAverages {
        #[arg(long)]
        subject_id: i64,
    },
    /// Average over every grade.
    GlobalAverage,
    /// Subjects a teacher owns.
    TeacherSubjects {
        #[arg(long)]
        teacher_id: i64,
    },
    /// Students in a group.
    GroupRoster {
        #[arg(long)]
        group_id: i64,
    },
    /// Every grade of a group's students in a subject.
    GroupGrades {
        #[arg(long)]
        group_id: i64,
        #[arg(long)]
        subject_id: i64,
    },
    /// Average over a teacher's subjects.
    TeacherAverage {
        #[arg(long)]
        teacher_id: i64,
    },
    /// Subjects a student has grades in.
    StudentCourses {
        #[arg(long)]
        student_id: i64,
    },
    /// Subjects a student has grades in, for one teacher.
    StudentCoursesByTeacher {
        #[arg(long)]
        student_id: i64,
        #[arg(long)]
        teacher_id: i64,
    },
    /// Average a teacher's subjects gave one student.
    TeacherStudentAverage {
        #[arg(long)]
        teacher_id: i64,
        #[arg(long)]
        student_id: i64,
    },
    /// Each student's grades from their latest session in a subject.
    LastSession {
        #[arg(long)]
        group_id: i64,
        #[arg(long)]
        subject_id: i64,
    },
}
